//! # splitledger-ledger
//!
//! **Balance side** of the engine: turns a ledger snapshot into one signed
//! balance per participant, and guards the snapshot on the way in.
//!
//! ## Architecture
//!
//! 1. **LedgerValidator**: rejects malformed snapshots (unknown ids, empty
//!    participant lists, negative amounts) before they reach the calculator
//! 2. **Calculator**: `summarize(person, expenses) -> PersonSummary`
//! 3. **ConservationCheck**: paid, owed and net totals must match the
//!    expense pool up to rounding drift
//!
//! ```text
//! Ledger → validate_ledger() → summarize_all() → ConservationCheck.verify()
//!        → splitledger-settlement
//! ```

pub mod calculator;
pub mod conservation;
pub mod validation;

pub use calculator::{
    summarize, summarize_all, summarize_all_with_precision, summarize_with_precision,
};
pub use conservation::{ConservationCheck, ConservationTotals};
pub use validation::{LedgerValidator, ValidationWarning, validate_ledger};
