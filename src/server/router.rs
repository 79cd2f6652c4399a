use axum::{
    http::{header, HeaderName, Method},
    middleware::{from_fn_with_state, map_response_with_state},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        group,
        index::{index, not_found},
        message,
    },
    middleware::{error::report_errors, identity::require_identity},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(title = "Group Chat API", description = "Groups and membership-gated messaging"))]
struct ApiDoc;

/// Builds the application router.
///
/// Every `/groups` route passes through the identity middleware before its handler. Error
/// responses from any route, the fallbacks included, pass through `report_errors`.
pub fn router(state: AppState) -> Router {
    let (group_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(group::list_groups, group::create_group))
        .routes(routes!(group::join_group))
        .routes(routes!(message::send_message, message::list_messages))
        .split_for_parts();

    let group_routes =
        group_routes.route_layer(from_fn_with_state(state.clone(), require_identity));

    Router::new()
        .route("/", get(index))
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .merge(group_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(map_response_with_state(state.error_policy, report_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-username"),
        ])
}
