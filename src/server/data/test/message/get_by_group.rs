use super::*;

/// Tests listing messages for a group without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_group_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_member(db).await?;

    let repo = MessageRepository::new(db);

    assert!(repo.get_by_group(group.id).await?.is_empty());

    Ok(())
}

/// Tests that messages are returned in timestamp order, not insertion order.
///
/// Expected: Ok with messages sorted by ascending timestamp
#[tokio::test]
async fn orders_by_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_group_with_member(db).await?;
    let now = Utc::now();

    let latest = MessageFactory::new(db, group.id, user.id)
        .timestamp(now)
        .build()
        .await?;
    let earliest = MessageFactory::new(db, group.id, user.id)
        .timestamp(now - Duration::seconds(10))
        .build()
        .await?;
    let middle = MessageFactory::new(db, group.id, user.id)
        .timestamp(now - Duration::seconds(5))
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_group(group.id).await?;

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![earliest.id, middle.id, latest.id]);

    Ok(())
}

/// Tests that messages with identical timestamps come back in insertion order.
///
/// Expected: Ok with tied messages ordered by ascending id
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_group_with_member(db).await?;
    let now = Utc::now();

    let first = MessageFactory::new(db, group.id, user.id)
        .timestamp(now)
        .build()
        .await?;
    let second = MessageFactory::new(db, group.id, user.id)
        .timestamp(now)
        .build()
        .await?;
    let third = MessageFactory::new(db, group.id, user.id)
        .timestamp(now)
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_group(group.id).await?;

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that listing is scoped to the requested group.
///
/// Expected: Ok with only the requested group's messages
#[tokio::test]
async fn excludes_other_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_group_with_member(db).await?;
    let other = factory::create_group(db, user.id).await?;

    let mine = factory::create_message(db, group.id, user.id).await?;
    factory::create_message(db, other.id, user.id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_group(group.id).await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, mine.id);

    Ok(())
}
