//! Error types for the splitledger engine.
//!
//! The balance calculator and the settlement reducer are total and never
//! fail. Errors only come from the edges: ledger validation, invariant
//! checks, configuration and I/O.
//!
//! All errors use the `SL_ERR_` prefix. Codes are grouped by subsystem:
//! - 1xx: Participant errors
//! - 2xx: Expense errors
//! - 3xx: Settlement / invariant errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ExpenseId, PersonId};

/// Central error enum for all splitledger operations.
#[derive(Debug, Error)]
pub enum SplitledgerError {
    // =================================================================
    // Participant Errors (1xx)
    // =================================================================
    /// Two participants share the same id.
    #[error("SL_ERR_100: Duplicate participant id: {0}")]
    DuplicatePerson(PersonId),

    /// The requested participant is not part of the ledger.
    #[error("SL_ERR_101: Participant not found: {0}")]
    PersonNotFound(PersonId),

    // =================================================================
    // Expense Errors (2xx)
    // =================================================================
    /// Expense amount is below zero.
    #[error("SL_ERR_200: Negative amount {amount} on {expense}")]
    NegativeAmount { expense: ExpenseId, amount: Decimal },

    /// Nobody shares the expense.
    #[error("SL_ERR_201: {0} has no participants")]
    EmptyParticipants(ExpenseId),

    /// The payer is not a known participant.
    #[error("SL_ERR_202: {expense} is paid by unknown {payer}")]
    UnknownPayer { expense: ExpenseId, payer: PersonId },

    /// A sharing participant is not a known participant.
    #[error("SL_ERR_203: {expense} is shared by unknown {person}")]
    UnknownParticipant { expense: ExpenseId, person: PersonId },

    /// The same participant is listed twice in one expense.
    #[error("SL_ERR_204: {expense} lists {person} more than once")]
    DuplicateParticipant { expense: ExpenseId, person: PersonId },

    // =================================================================
    // Settlement / Invariant Errors (3xx)
    // =================================================================
    /// Paid, owed or net totals don't add up to the expense pool.
    #[error("SL_ERR_300: Conservation violated: {reason}")]
    ConservationViolation { reason: String },

    /// A participant still carries a balance after all transfers.
    #[error("SL_ERR_301: {person} left with residual {residual} (tolerance {tolerance})")]
    UnsettledResidual {
        person: PersonId,
        residual: Decimal,
        tolerance: Decimal,
    },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SL_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, out-of-range values, etc.).
    #[error("SL_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("SL_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitledgerError>;

impl From<std::io::Error> for SplitledgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitledgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
