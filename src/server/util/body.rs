//! Lenient JSON request body extractor.
//!
//! Clients of this API send bodies with or without a JSON content type, and sometimes send
//! nothing at all. [`JsonBody`] parses the raw bytes as JSON regardless of headers and falls
//! back to the payload's `Default` when they are not a valid object of the expected shape, so
//! the handler's own validation produces the error response.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body that never rejects the request.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Bytes::from_request(req, state).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => T::default(),
        };

        Ok(Self(payload))
    }
}
