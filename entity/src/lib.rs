//! SeaORM entities for the group chat schema.

pub mod group;
pub mod group_member;
pub mod message;
pub mod prelude;
pub mod user;
