//! Message factory for creating test message entities.

use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test messages.
///
/// The timestamp defaults to now, truncated to whole seconds like stored messages. Override
/// it to build ordering scenarios.
///
/// # Example
///
/// ```rust,ignore
/// let message = MessageFactory::new(&db, group.id, user.id)
///     .message("Hello World")
///     .timestamp(earlier)
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    user_id: i32,
    message: String,
    timestamp: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with a unique `Message {id}` body stamped now.
    pub fn new(db: &'a DatabaseConnection, group_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            group_id,
            user_id,
            message: format!("Message {}", id),
            timestamp: Utc::now().trunc_subsecs(0),
        }
    }

    /// Sets the message text.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the message timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            group_id: ActiveValue::Set(self.group_id),
            user_id: ActiveValue::Set(self.user_id),
            message: ActiveValue::Set(self.message),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values.
pub async fn create_message(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, group_id, user_id).build().await
}
