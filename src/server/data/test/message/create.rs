use super::*;

/// Tests storing a message.
///
/// Verifies that the text is stored as given and stamped with the current time truncated to
/// whole seconds.
///
/// Expected: Ok with assigned id and a timestamp between the call bounds
#[tokio::test]
async fn creates_message_with_current_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_group_with_member(db).await?;

    let before = Utc::now().trunc_subsecs(0);
    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams {
            group_id: group.id,
            user_id: user.id,
            message: " Hello World ".to_string(),
        })
        .await?;
    let after = Utc::now();

    assert!(message.id > 0);
    assert_eq!(message.group_id, group.id);
    assert_eq!(message.user_id, user.id);
    assert_eq!(message.message, " Hello World ");
    assert!(message.timestamp >= before && message.timestamp <= after);
    assert_eq!(message.timestamp.nanosecond(), 0);

    Ok(())
}

/// Tests that consecutive messages get increasing ids and non-decreasing timestamps.
///
/// Expected: Ok with second id greater and timestamp not earlier
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_group_with_member(db).await?;

    let repo = MessageRepository::new(db);
    let params = CreateMessageParams {
        group_id: group.id,
        user_id: user.id,
        message: "one".to_string(),
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert!(second.id > first.id);
    assert!(second.timestamp >= first.timestamp);

    Ok(())
}
