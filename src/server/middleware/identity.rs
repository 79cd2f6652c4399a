use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::AppError,
    model::user::CurrentUser,
    service::identity::{IdentityResolver, IdentityService},
    state::AppState,
};

/// Header carrying the caller's username.
pub const USERNAME_HEADER: &str = "x-username";

/// Resolves the caller from the `X-Username` header and attaches it as [`CurrentUser`].
///
/// An absent header, one that is not valid UTF-8, and one that is blank after trimming are
/// all rejected with 400 before the handler runs. Unknown usernames are provisioned.
///
/// This is the only place an [`IdentityResolver`] is constructed; an alternative identity
/// scheme replaces the `IdentityService` built here.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let username = request
        .headers()
        .get(USERNAME_HEADER)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .unwrap_or_default()
        .to_string();

    let user = IdentityService::new(&state.db).resolve(&username).await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
