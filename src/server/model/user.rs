//! User domain model.
//!
//! Users are provisioned from the `X-Username` header the first time a name is seen and are
//! never modified afterwards.

/// A user resolved from the request identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i32,
    /// Unique, trimmed, non-empty username.
    pub username: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }
}

/// The user attached to a request by the identity middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub User);
