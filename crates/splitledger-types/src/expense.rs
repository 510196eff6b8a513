//! Expense records.
//!
//! An [`Expense`] is one payment made by a single payer on behalf of an
//! ordered set of participants who split it equally.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, PersonId};

/// A dated expense paid by one participant and shared equally by others.
///
/// `participants` is expected to be non-empty; the payer does not have to
/// be part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Amount paid, non-negative.
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    /// Who paid.
    pub payer: PersonId,
    /// Who shares the cost, in caller order.
    pub participants: Vec<PersonId>,
    /// Calendar date. Only used for display and ordering.
    pub date: NaiveDate,
    /// Optional time of day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
}

impl Expense {
    /// Date and time combined; midnight when no time was recorded.
    #[must_use]
    pub fn occurred_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Whether `person` is one of the participants sharing this expense.
    #[must_use]
    pub fn is_shared_by(&self, person: PersonId) -> bool {
        self.participants.contains(&person)
    }

    /// Whether `person` paid this expense or shares it.
    #[must_use]
    pub fn involves(&self, person: PersonId) -> bool {
        self.payer == person || self.is_shared_by(person)
    }

    /// Equal share owed by each participant, unrounded.
    ///
    /// `None` for an expense with no participants.
    #[must_use]
    pub fn share(&self) -> Option<Decimal> {
        if self.participants.is_empty() {
            return None;
        }
        Some(self.amount / Decimal::from(self.participants.len()))
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expense[{}] {} paid by {} split {} ways on {}",
            self.id,
            self.amount,
            self.payer,
            self.participants.len(),
            self.date,
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Expense dated 2024-01-01 with no description.
    pub fn dummy(id: u64, amount: Decimal, payer: u64, participants: &[u64]) -> Self {
        Self {
            id: ExpenseId(id),
            amount,
            description: String::new(),
            payer: PersonId(payer),
            participants: participants.iter().copied().map(PersonId).collect(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date"),
            time: None,
        }
    }
}
