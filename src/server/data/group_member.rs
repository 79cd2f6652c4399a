//! Group membership data repository.
//!
//! Memberships are keyed by the `(group_id, user_id)` pair. There is no leave operation, so
//! this repository only ever adds rows.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for group memberships.
pub struct GroupMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupMemberRepository<'a> {
    /// Creates a new GroupMemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupMemberRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `user_id` to `group_id`, ignoring an existing membership.
    ///
    /// # Arguments
    /// - `user_id` - Id of the joining user
    /// - `group_id` - Id of the group to join
    ///
    /// # Returns
    /// - `Ok(true)` - A new membership row was inserted
    /// - `Ok(false)` - The user was already a member
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the group or
    ///   user does not exist
    pub async fn join(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::GroupMember::insert(entity::group_member::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::group_member::Column::GroupId,
                entity::group_member::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Checks whether `user_id` is a member of `group_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership exists
    /// - `Ok(false)` - Not a member
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_member(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::GroupMember::find_by_id((group_id, user_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }
}
