//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the single error type
//! returned by services, guards, and controllers, and `IntoResponse for AppError` is the one
//! place where an error kind is mapped to a status code and a client-facing message.
//!
//! The internal cause of every error is attached to the response as an [`ErrorReport`]
//! extension. The `report_errors` middleware reads it to log the failure and, when verbose
//! errors are enabled, to expose the cause to the client.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Client-facing message for store failures when verbose errors are disabled.
pub const DATABASE_ERROR_MESSAGE: &str = "Database error occurred";

/// Client-facing message for any other unmapped failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Top-level application error type.
///
/// Validation and authorization failures carry the exact message sent to the client.
/// Infrastructure failures carry their cause, which is only ever logged or, in verbose
/// mode, echoed back.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Persistence failure from SeaORM: connection loss, constraint violation, disk error.
    ///
    /// Results in 500 Internal Server Error with a generic "Database error occurred" message.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request: missing identity header, blank group name, blank message.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Referenced resource does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Caller lacks the membership required for the action.
    ///
    /// Results in 403 Forbidden with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a generic message is
    /// returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Short name of the error kind used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigErr(_) => "ConfigError",
            Self::DbErr(_) => "StoreError",
            Self::IoErr(_) => "IoError",
            Self::BadRequest(_) => "BadRequest",
            Self::NotFound(_) => "NotFound",
            Self::Forbidden(_) => "Forbidden",
            Self::InternalError(_) => "InternalError",
        }
    }

    /// Status code and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            Self::DbErr(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                DATABASE_ERROR_MESSAGE.to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

/// Internal description of a failed request, carried as a response extension.
#[derive(Clone, Debug)]
pub struct ErrorReport {
    /// Error kind, see [`AppError::kind`].
    pub kind: &'static str,
    /// Message sent to the client.
    pub message: String,
    /// `Display` form of the error, including the cause for infrastructure failures.
    pub detail: String,
    /// `Debug` form of the error, logged only when error details are enabled.
    pub debug: String,
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `DbErr` ("Database error occurred") and every other
///   variant ("Internal Server Error")
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let report = ErrorReport {
            kind: self.kind(),
            message: message.clone(),
            detail: self.to_string(),
            debug: format!("{:?}", self),
        };

        let mut response = (status, Json(ErrorDto { error: message })).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
