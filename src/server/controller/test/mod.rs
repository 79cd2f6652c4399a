use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{config::ErrorPolicy, router::router, state::AppState};


/// Builds a test database with every chat table and a router over it.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let app = app(test.db.clone().unwrap(), ErrorPolicy::default());

    (test, app)
}

fn app(db: DatabaseConnection, error_policy: ErrorPolicy) -> Router {
    router(AppState::new(db, error_policy))
}

/// Sends one request through the router and decodes the JSON response body.
///
/// `body` is sent verbatim without a content type, the way the API's clients do.
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    username: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let (status, _, value) = send_with_content_type(app, method, uri, username, body).await;

    (status, value)
}

/// Like [`send`], also returning the response `Content-Type`.
async fn send_with_content_type(
    app: &Router,
    method: &str,
    uri: &str,
    username: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Option<String>, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(username) = username {
        request = request.header("X-Username", username);
    }
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, content_type, value)
}

/// Counts stored users, to check which requests provisioned an identity.
async fn user_count(db: &DatabaseConnection) -> u64 {
    use sea_orm::{EntityTrait, PaginatorTrait};

    entity::prelude::User::find().count(db).await.unwrap()
}

fn error(message: &str) -> Value {
    json!({ "error": message })
}
