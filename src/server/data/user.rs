//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up and provisioning users by
//! username. Usernames are unique at the store level, which is what makes concurrent
//! provisioning of the same name converge on one row.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::User;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by exact username.
    ///
    /// # Arguments
    /// - `username` - Username to look up, compared byte for byte
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Creates a new user.
    ///
    /// # Arguments
    /// - `username` - Username for the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique constraint violation when the
    ///   username is already taken
    pub async fn create(&self, username: &str) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Returns the user with `username`, creating it when absent.
    ///
    /// Looks the user up first. When absent, inserts with `ON CONFLICT DO NOTHING` on the
    /// unique username and reads the row back, so a concurrent request that inserted the same
    /// name first wins and both callers resolve to its row.
    ///
    /// # Arguments
    /// - `username` - Username to resolve
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created user
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, username: &str) -> Result<User, DbErr> {
        if let Some(user) = self.find_by_username(username).await? {
            return Ok(user);
        }

        entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_username(username).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("user '{}' missing after insert", username))
        })
    }
}
