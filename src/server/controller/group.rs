use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        group::{CreateGroupDto, CreatedGroupDto, GroupDto},
    },
    server::{
        error::AppError,
        model::user::CurrentUser,
        service::group::GroupService,
        state::AppState,
        util::{body::JsonBody, parse::parse_group_id},
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List all groups.
///
/// Returns every group regardless of the caller's memberships.
///
/// # Access Control
/// - Any identified caller
///
/// # Returns
/// - `200 OK` - All groups in ascending id order
/// - `400 Bad Request` - Missing `X-Username` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    params(
        ("X-Username" = String, Header, description = "Username of the caller")
    ),
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 400, description = "Missing username header", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).list().await?;

    let groups: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// Create a new group.
///
/// The caller is recorded as the creator but does not join the group.
///
/// # Access Control
/// - Any identified caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - Caller resolved by the identity middleware
/// - `payload` - Group name
///
/// # Returns
/// - `201 Created` - Group created
/// - `400 Bad Request` - Missing username header, or missing or blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    params(
        ("X-Username" = String, Header, description = "Username of the caller")
    ),
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = CreatedGroupDto),
        (status = 400, description = "Missing username header or invalid group name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    JsonBody(payload): JsonBody<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .create(user.id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_created_dto())))
}

/// Join a group.
///
/// Joining a group the caller already belongs to succeeds without change.
///
/// # Access Control
/// - Any identified caller
///
/// # Returns
/// - `200 OK` - Caller is a member of the group
/// - `400 Bad Request` - Missing username header
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/{group_id}/join",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("X-Username" = String, Header, description = "Username of the caller")
    ),
    responses(
        (status = 200, description = "Caller joined the group", body = StatusDto),
        (status = 400, description = "Missing username header", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let group_id = parse_group_id(&group_id)?;

    GroupService::new(&state.db).join(user.id, group_id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "joined".to_string(),
        }),
    ))
}
