use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{config::ErrorPolicy, error::ErrorReport},
};

/// Logs error responses and, in verbose mode, exposes the cause of server errors.
///
/// Only responses produced from an `AppError` carry an [`ErrorReport`]; everything else passes
/// through untouched. Client errors are logged at `warn`, server errors at `error`, both as
/// `[status] message`.
pub async fn report_errors(State(policy): State<ErrorPolicy>, response: Response) -> Response {
    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };
    let status = response.status();

    if policy.log_errors {
        log_report(&policy, status, &report);
    }

    if policy.display_errors && status.is_server_error() {
        return (status, Json(ErrorDto { error: report.detail })).into_response();
    }

    response
}

fn log_report(policy: &ErrorPolicy, status: StatusCode, report: &ErrorReport) {
    let code = status.as_u16();

    match (status.is_server_error(), policy.log_error_details) {
        (true, true) => tracing::error!(
            kind = report.kind,
            detail = %report.debug,
            "[{}] {}",
            code,
            report.message
        ),
        (true, false) => tracing::error!("[{}] {}", code, report.message),
        (false, true) => tracing::warn!(
            kind = report.kind,
            detail = %report.debug,
            "[{}] {}",
            code,
            report.message
        ),
        (false, false) => tracing::warn!("[{}] {}", code, report.message),
    }
}
