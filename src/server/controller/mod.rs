//! HTTP request handlers.
//!
//! Controllers extract the caller and request data, hand them to a service, and convert the
//! resulting domain model into a DTO. Validation, existence, and membership rules live in the
//! services so every handler gets the same check order.

pub mod group;
pub mod index;
pub mod message;

#[cfg(test)]
mod test;
