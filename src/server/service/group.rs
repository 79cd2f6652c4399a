use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, group_member::GroupMemberRepository},
    error::AppError,
    middleware::membership::MembershipGuard,
    model::group::{CreateGroupParams, Group, JoinOutcome},
};

/// Message returned when a group is created without a usable name.
pub const GROUP_NAME_REQUIRED: &str = "Group name is required and must be a non-empty string";

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every group in ascending id order
    pub async fn list(&self) -> Result<Vec<Group>, AppError> {
        let groups = GroupRepository::new(self.db).get_all().await?;

        Ok(groups)
    }

    /// Creates a group owned by `created_by`.
    ///
    /// The name must contain something other than whitespace but is stored as submitted.
    /// The creator is not made a member.
    pub async fn create(&self, created_by: i32, name: Option<String>) -> Result<Group, AppError> {
        let name = match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AppError::BadRequest(GROUP_NAME_REQUIRED.to_string())),
        };

        let group = GroupRepository::new(self.db)
            .create(CreateGroupParams { name, created_by })
            .await?;

        tracing::debug!(group_id = group.id, created_by, "Created group");

        Ok(group)
    }

    /// Adds `user_id` to `group_id`; joining a group twice is not an error
    pub async fn join(&self, user_id: i32, group_id: i32) -> Result<JoinOutcome, AppError> {
        MembershipGuard::new(self.db).require_group(group_id).await?;

        let inserted = GroupMemberRepository::new(self.db)
            .join(user_id, group_id)
            .await?;

        let outcome = if inserted {
            JoinOutcome::Joined
        } else {
            JoinOutcome::AlreadyMember
        };

        tracing::debug!(user_id, group_id, ?outcome, "Joined group");

        Ok(outcome)
    }
}
