use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        message::{MessageDto, SendMessageDto},
    },
    server::{
        error::AppError,
        model::user::CurrentUser,
        service::message::MessageService,
        state::AppState,
        util::{body::JsonBody, parse::parse_group_id},
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Send a message to a group.
///
/// # Access Control
/// - Caller must be a member of the group
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - Caller resolved by the identity middleware
/// - `group_id` - Raw group ID path segment
/// - `payload` - Message text
///
/// # Returns
/// - `201 Created` - Stored message
/// - `400 Bad Request` - Missing username header, or missing or blank message
/// - `403 Forbidden` - Caller is not a member of the group
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/{group_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("X-Username" = String, Header, description = "Username of the caller")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Successfully sent message", body = MessageDto),
        (status = 400, description = "Missing username header or invalid message", body = ErrorDto),
        (status = 403, description = "Caller is not a member of the group", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(group_id): Path<String>,
    JsonBody(payload): JsonBody<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let group_id = parse_group_id(&group_id)?;

    let message = MessageService::new(&state.db)
        .send(user.id, group_id, payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// List a group's messages.
///
/// Messages come back in send order. Any identified caller may read, member or not.
///
/// # Returns
/// - `200 OK` - Messages ordered by timestamp, then id
/// - `400 Bad Request` - Missing username header
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups/{group_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("X-Username" = String, Header, description = "Username of the caller")
    ),
    responses(
        (status = 200, description = "Successfully retrieved messages", body = Vec<MessageDto>),
        (status = 400, description = "Missing username header", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let group_id = parse_group_id(&group_id)?;

    let messages = MessageService::new(&state.db).list(group_id).await?;

    let messages: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages)))
}
