//! Request identity resolution.
//!
//! The API trusts the username a client supplies. [`IdentityResolver`] is the seam where that
//! trust lives, so a resolver that verifies credentials can replace [`IdentityService`]
//! without touching the middleware or handlers.

use std::future::Future;

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Message returned when a request carries no usable username.
pub const USERNAME_MISSING: &str = "Username header (X-Username) is missing";

/// Maps a client-supplied username to a durable user.
pub trait IdentityResolver {
    /// Resolves `username` to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user the request acts as
    /// - `Err(AppError::BadRequest)` - No usable username was supplied
    /// - `Err(AppError::DbErr)` - Store failure
    fn resolve(&self, username: &str) -> impl Future<Output = Result<User, AppError>> + Send;
}

/// Resolves usernames by looking them up and provisioning unknown ones on first sight.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IdentityResolver for IdentityService<'_> {
    /// Trims the username and gets or creates the matching user.
    ///
    /// The trimmed form is what gets stored, so `" alice "` and `"alice"` are one user.
    async fn resolve(&self, username: &str) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::BadRequest(USERNAME_MISSING.to_string()));
        }

        let user = UserRepository::new(self.db).get_or_create(username).await?;

        tracing::debug!(user_id = user.id, username = %user.username, "Resolved request identity");

        Ok(user)
    }
}
