use super::*;

/// Tests finding an existing user by username.
///
/// Verifies that the repository returns the stored user when the username matches.
///
/// Expected: Ok(Some) with matching id and username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_named(db, "alice").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("alice").await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.username, "alice");

    Ok(())
}

/// Tests looking up a username that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_named(db, "alice").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("bob").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that username lookup is exact.
///
/// Verifies that a username differing only in case or surrounding whitespace does not match.
///
/// Expected: Ok(None) for both variants
#[tokio::test]
async fn matches_username_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_named(db, "alice").await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("Alice").await?.is_none());
    assert!(repo.find_by_username(" alice").await?.is_none());

    Ok(())
}
