use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub created_by: i32,
}

/// Response body for a newly created group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedGroupDto {
    pub id: i32,
    pub name: String,
}

/// Request body for creating a group.
///
/// `name` is optional at the wire level so a missing field reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    #[serde(default)]
    pub name: Option<String>,
}
