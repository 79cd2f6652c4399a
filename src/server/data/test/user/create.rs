use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with a positive id and the given username
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create("alice").await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");

    Ok(())
}

/// Tests creating a user whose username is already taken.
///
/// Verifies that the unique constraint on username rejects the second insert.
///
/// Expected: Err(DbErr) and only one stored row
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("alice").await?;

    let result = repo.create("alice").await;

    assert!(result.is_err());
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
