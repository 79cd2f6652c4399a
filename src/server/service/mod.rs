//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting blank usernames, group names, and messages
//! - **Authorization**: Running the membership guard before group-scoped work
//! - **Orchestration**: Coordinating repository calls in the order the API guarantees
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod group;
pub mod identity;
pub mod message;

#[cfg(test)]
mod test;
