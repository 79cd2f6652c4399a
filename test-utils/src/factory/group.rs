//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups.
///
/// The creator must already exist; groups reference `users.id` through `created_by`.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db, user.id)
///     .name("Test Group")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    created_by: i32,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with a unique `Group {id}` name.
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            created_by,
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_by: ActiveValue::Set(self.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values created by `created_by`.
pub async fn create_group(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, created_by).build().await
}
