//! Database repository layer for all domain entities.
//!
//! This module contains one repository struct per relation. Repositories use SeaORM entity
//! models internally and return domain models to keep the data layer separate from the
//! business logic layer. Every read and write of persistent state goes through them.

pub mod group;
pub mod group_member;
pub mod message;
pub mod user;
