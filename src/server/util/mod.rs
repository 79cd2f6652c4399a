//! Request parsing helpers shared by controllers.

pub mod body;
pub mod parse;
