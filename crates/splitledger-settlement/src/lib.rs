//! # splitledger-settlement
//!
//! **Settlement side** of the engine: turns per-person balances into a
//! short, ordered list of peer-to-peer transfers.
//!
//! ## Architecture
//!
//! The reducer receives balances from `splitledger-ledger` and:
//! 1. Partitions them into creditors and debtors outside the dead zone
//! 2. Matches both lists greedily with two cursors
//! 3. Emits one [`Transfer`](splitledger_types::Transfer) per non-trivial
//!    match, in construction order
//!
//! [`verify_settlement`] replays a transfer list against the balances and
//! [`SettlementReport`] bundles totals, summaries and transfers for
//! display layers.

pub mod reducer;
pub mod report;
pub mod verification;

pub use reducer::{partition, reduce_balances, settle, settle_with};
pub use report::SettlementReport;
pub use verification::{apply_transfers, residual_tolerance, verify_settlement};
