use super::*;

/// Tests existence check for a stored group.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db, user.id).await?;

    let repo = GroupRepository::new(db);

    assert!(repo.exists(group.id).await?);

    Ok(())
}

/// Tests existence check for ids that were never assigned.
///
/// Expected: Ok(false) for an unused id, zero, and a negative id
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(!repo.exists(999).await?);
    assert!(!repo.exists(0).await?);
    assert!(!repo.exists(-1).await?);

    Ok(())
}
