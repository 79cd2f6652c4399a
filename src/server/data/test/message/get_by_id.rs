use super::*;

/// Tests fetching a stored message by id.
///
/// Expected: Ok(Some) equal to the stored message
#[tokio::test]
async fn returns_stored_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_group_with_member(db).await?;

    let repo = MessageRepository::new(db);
    let created = repo
        .create(CreateMessageParams {
            group_id: group.id,
            user_id: user.id,
            message: "Hello World".to_string(),
        })
        .await?;

    let fetched = repo.get_by_id(created.id).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests fetching a message id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
