//! Message data repository for database operations.
//!
//! Messages are stamped with the current UTC time, at whole-second resolution, on insert and
//! read back in `(timestamp, id)` order. Messages sent within the same second keep their
//! insertion order through the id tie-break.

use chrono::{SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::message::{CreateMessageParams, Message};

/// Repository providing database operations for messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new MessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MessageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new message stamped with the current time.
    ///
    /// # Arguments
    /// - `params` - Group, author, and text of the message
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message with its id and timestamp
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the group or
    ///   author does not exist
    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            group_id: ActiveValue::Set(params.group_id),
            user_id: ActiveValue::Set(params.user_id),
            message: ActiveValue::Set(params.message),
            timestamp: ActiveValue::Set(Utc::now().trunc_subsecs(0)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets a message by id.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - Message found
    /// - `Ok(None)` - No message with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, message_id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Message::from_entity))
    }

    /// Gets every message of a group in send order.
    ///
    /// Ordered by ascending timestamp, with ties broken by ascending id.
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages of the group, empty when it has none or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_group(&self, group_id: i32) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::GroupId.eq(group_id))
            .order_by_asc(entity::message::Column::Timestamp)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }
}
