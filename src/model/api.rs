use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GreetingDto {
    pub message: String,
}
