use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::GreetingDto, server::error::AppError};

/// Message returned for any request that matches no route.
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Greeting served at the root path.
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(GreetingDto {
            message: "Hello from the group chat API".to_string(),
        }),
    )
}

/// Fallback for unknown routes and unsupported methods.
pub async fn not_found() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND.to_string())
}
