//! Group domain models and parameters.

use crate::model::group::{CreatedGroupDto, GroupDto};

/// A chat group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: i32,
    /// Name as submitted by the creator.
    pub name: String,
    /// Id of the user who created the group. The creator is not implicitly a member.
    pub created_by: i32,
}

impl Group {
    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_by: entity.created_by,
        }
    }

    /// Converts the group into the listing DTO.
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            created_by: self.created_by,
        }
    }

    /// Converts the group into the creation response DTO, which omits the creator.
    pub fn into_created_dto(self) -> CreatedGroupDto {
        CreatedGroupDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a group.
#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    /// Group name, stored exactly as given.
    pub name: String,
    /// Id of the creating user.
    pub created_by: i32,
}

/// Outcome of a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A new membership row was written.
    Joined,
    /// The user was already a member; nothing changed.
    AlreadyMember,
}
