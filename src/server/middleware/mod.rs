//! Request guards and middleware.
//!
//! - `identity` - Resolves `X-Username` into the request's [`CurrentUser`](crate::server::model::user::CurrentUser)
//! - `membership` - Group existence and membership checks used by the services
//! - `error` - Logs error responses and applies the configured error disclosure policy

pub mod error;
pub mod identity;
pub mod membership;

#[cfg(test)]
mod test;
