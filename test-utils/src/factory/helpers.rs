//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a group created by that user, and the user's membership in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, group))` - The member and the group they belong to
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_member(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::group::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db, user.id).await?;
    crate::factory::group_member::create_membership(db, group.id, user.id).await?;

    Ok((user, group))
}
