//! Transfers produced by the settlement reducer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PersonId;

/// One peer-to-peer payment: `from` (a debtor) pays `to` (a creditor).
///
/// Names are carried for display, ids for joining back to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from_id: PersonId,
    pub from: String,
    pub to_id: PersonId,
    pub to: String,
    /// Positive amount, rounded to cents.
    pub amount: Decimal,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

/// Sum of all transfer amounts.
#[must_use]
pub fn total_transferred(transfers: &[Transfer]) -> Decimal {
    transfers.iter().map(|t| t.amount).sum()
}
