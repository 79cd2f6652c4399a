use super::*;

/// Tests listing groups when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert!(groups.is_empty());

    Ok(())
}

/// Tests listing groups from several creators.
///
/// Verifies that every group is returned regardless of creator, in ascending id order.
///
/// Expected: Ok with all groups ordered by id
#[tokio::test]
async fn returns_all_groups_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let first = factory::create_group(db, alice.id).await?;
    let second = factory::create_group(db, bob.id).await?;
    let third = factory::create_group(db, alice.id).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(groups[1].created_by, bob.id);
    assert_eq!(groups[1].name, second.name);

    Ok(())
}
