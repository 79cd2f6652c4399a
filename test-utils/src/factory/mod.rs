//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let group = factory::create_group(&db, user.id).await?;
//!     factory::create_membership(&db, group.id, user.id).await?;
//!
//!     // Or all at once
//!     let (user, group) = factory::helpers::create_group_with_member(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `group` - Create group entities
//! - `group_member` - Create membership rows
//! - `message` - Create message entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod group;
pub mod group_member;
pub mod helpers;
pub mod message;
pub mod user;

pub use group::create_group;
pub use group_member::create_membership;
pub use message::create_message;
pub use user::{create_user, create_user_named};
