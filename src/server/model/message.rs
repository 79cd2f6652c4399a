//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::message::MessageDto;

/// A message posted to a group. Messages are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub group_id: i32,
    /// Id of the author.
    pub user_id: i32,
    pub message: String,
    /// Time the store accepted the message.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Converts an entity model to a message domain model at the repository boundary.
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            user_id: entity.user_id,
            message: entity.message,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            group_id: self.group_id,
            user_id: self.user_id,
            message: self.message,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for storing a message.
#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub group_id: i32,
    pub user_id: i32,
    /// Message text, stored exactly as given.
    pub message: String,
}
