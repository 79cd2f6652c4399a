//! Wire-level DTOs exchanged with API clients.

pub mod api;
pub mod group;
pub mod message;
