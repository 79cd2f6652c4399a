use super::*;

/// Tests provisioning a username seen for the first time.
///
/// Expected: Ok with a newly stored user
#[tokio::test]
async fn creates_user_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.get_or_create("alice").await?;

    assert_eq!(user.username, "alice");
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests resolving a username that already exists.
///
/// Verifies that the existing row is returned and no second row is written.
///
/// Expected: Ok with the existing id
#[tokio::test]
async fn returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user_named(db, "alice").await?;

    let repo = UserRepository::new(db);
    let user = repo.get_or_create("alice").await?;

    assert_eq!(user.id, existing.id);
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests repeated and concurrent provisioning of the same username.
///
/// Verifies that every call resolves to the same user id and exactly one row exists.
///
/// Expected: Ok with identical ids across all calls
#[tokio::test]
async fn resolves_repeated_calls_to_one_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (first, second) = tokio::join!(repo.get_or_create("carol"), repo.get_or_create("carol"));
    let third = repo.get_or_create("carol").await?;

    let first = first?;
    assert_eq!(first.id, second?.id);
    assert_eq!(first.id, third.id);
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that distinct usernames get distinct users.
///
/// Expected: Ok with different ids
#[tokio::test]
async fn creates_distinct_users_for_distinct_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let alice = repo.get_or_create("alice").await?;
    let bob = repo.get_or_create("bob").await?;

    assert_ne!(alice.id, bob.id);

    Ok(())
}
