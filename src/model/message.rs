use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Request body for posting a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SendMessageDto {
    #[serde(default)]
    pub message: Option<String>,
}
