//! Subcommand implementations.

pub mod check;
pub mod settle;
pub mod summary;
