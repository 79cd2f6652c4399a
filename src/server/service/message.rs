use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    middleware::membership::MembershipGuard,
    model::message::{CreateMessageParams, Message},
};

/// Message returned when a message is sent without usable text.
pub const MESSAGE_REQUIRED: &str = "Message is required and must be a non-empty string";

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a message to a group on behalf of `user_id`.
    ///
    /// Checks run in a fixed order: the group must exist, the sender must be a member, and
    /// only then is the text validated. The stored record is read back and returned.
    pub async fn send(
        &self,
        user_id: i32,
        group_id: i32,
        text: Option<String>,
    ) -> Result<Message, AppError> {
        let guard = MembershipGuard::new(self.db);
        guard.require_group(group_id).await?;
        guard.require_member(user_id, group_id).await?;

        let message = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(AppError::BadRequest(MESSAGE_REQUIRED.to_string())),
        };

        let repo = MessageRepository::new(self.db);
        let created = repo
            .create(CreateMessageParams {
                group_id,
                user_id,
                message,
            })
            .await?;

        let message = repo.get_by_id(created.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Message {} missing after insert", created.id))
        })?;

        Ok(message)
    }

    /// Lists a group's messages in send order.
    ///
    /// Reading is not gated on membership; only the group's existence is checked.
    pub async fn list(&self, group_id: i32) -> Result<Vec<Message>, AppError> {
        MembershipGuard::new(self.db).require_group(group_id).await?;

        let messages = MessageRepository::new(self.db).get_by_group(group_id).await?;

        Ok(messages)
    }
}
