//! Membership factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row for `user_id` in `group_id`.
///
/// Both the group and the user must exist. Inserting the same pair twice fails with a
/// primary key violation; use the repository's `join` for insert-or-ignore behaviour.
pub async fn create_membership(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::group_member::Model, DbErr> {
    entity::group_member::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
