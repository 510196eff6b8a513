//! # splitledger-types
//!
//! Shared types, errors, and configuration for the **splitledger** engine.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PersonId`], [`ExpenseId`]
//! - **Input model**: [`Person`], [`Expense`], [`Ledger`]
//! - **Derived model**: [`PersonSummary`], [`ParticipantSummary`], [`PersonBalance`], [`Transfer`]
//! - **Money**: cent rounding, half away from zero
//! - **Configuration**: [`SettlementConfig`]
//! - **Errors**: [`SplitledgerError`] with `SL_ERR_` prefix codes
//! - **Constants**: dead zone and precision defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod person;
pub mod summary;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitledger_types::{Person, Expense, Transfer, ...};

pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use ledger::*;
pub use money::*;
pub use person::*;
pub use summary::*;
pub use transfer::*;

// Constants are accessed via `splitledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
