//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary, and
//! controllers convert them into wire DTOs. Nothing above the data layer sees an entity.

pub mod group;
pub mod message;
pub mod user;
