use super::*;

/// Tests creating a group.
///
/// Verifies that the name is stored exactly as submitted and the creator is recorded.
///
/// Expected: Ok with assigned id, unmodified name and created_by set
#[tokio::test]
async fn creates_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParams {
            name: "  Test Group ".to_string(),
            created_by: user.id,
        })
        .await?;

    assert!(group.id > 0);
    assert_eq!(group.name, "  Test Group ");
    assert_eq!(group.created_by, user.id);

    Ok(())
}

/// Tests that the creator is not made a member of the group.
///
/// Expected: no membership row for the creator
#[tokio::test]
async fn does_not_add_creator_as_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParams {
            name: "Test Group".to_string(),
            created_by: user.id,
        })
        .await?;

    let member_repo = crate::server::data::group_member::GroupMemberRepository::new(db);
    assert!(!member_repo.is_member(user.id, group.id).await?);

    Ok(())
}
