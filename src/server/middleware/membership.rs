use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, group_member::GroupMemberRepository},
    error::AppError,
    util::parse::GROUP_NOT_FOUND,
};

/// Message returned when a non-member tries to act inside a group.
pub const MEMBERSHIP_REQUIRED: &str = "User must join the group to send messages";

/// Guards group-scoped operations.
///
/// Callers run `require_group` before `require_member` so an unknown group is always
/// reported as 404 regardless of who asks.
pub struct MembershipGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fails with `NotFound("Group not found")` unless `group_id` exists.
    pub async fn require_group(&self, group_id: i32) -> Result<(), AppError> {
        if !GroupRepository::new(self.db).exists(group_id).await? {
            return Err(AppError::NotFound(GROUP_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    /// Fails with `Forbidden` unless `user_id` is a member of `group_id`.
    pub async fn require_member(&self, user_id: i32, group_id: i32) -> Result<(), AppError> {
        if !GroupMemberRepository::new(self.db)
            .is_member(user_id, group_id)
            .await?
        {
            return Err(AppError::Forbidden(MEMBERSHIP_REQUIRED.to_string()));
        }

        Ok(())
    }
}
