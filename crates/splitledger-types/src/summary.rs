//! Derived per-person figures.
//!
//! Nothing here is stored: summaries and balances are recomputed from the
//! current ledger snapshot every time they are needed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Person, PersonId};

/// What one participant paid, what they should have paid, and the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    /// Sum of amounts this person paid.
    pub total_paid: Decimal,
    /// Sum of this person's equal shares.
    pub total_should: Decimal,
    /// `total_paid - total_should`. Positive means the person is owed money.
    pub balance: Decimal,
}

impl PersonSummary {
    /// All-zero summary.
    pub const ZERO: Self = Self {
        total_paid: Decimal::ZERO,
        total_should: Decimal::ZERO,
        balance: Decimal::ZERO,
    };
}

impl Default for PersonSummary {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A [`PersonSummary`] keyed by the participant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub person_id: PersonId,
    pub name: String,
    #[serde(flatten)]
    pub summary: PersonSummary,
}

impl ParticipantSummary {
    #[must_use]
    pub fn new(person: &Person, summary: PersonSummary) -> Self {
        Self {
            person_id: person.id,
            name: person.name.clone(),
            summary,
        }
    }

    /// Signed balance view used by the settlement reducer.
    #[must_use]
    pub fn to_balance(&self) -> PersonBalance {
        PersonBalance {
            person_id: self.person_id,
            name: self.name.clone(),
            balance: self.summary.balance,
        }
    }
}

/// Signed net balance of one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBalance {
    pub person_id: PersonId,
    pub name: String,
    pub balance: Decimal,
}

impl PersonBalance {
    #[must_use]
    pub fn new(person_id: PersonId, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            person_id,
            name: name.into(),
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_summary_is_zero() {
        let s = PersonSummary::default();
        assert_eq!(s, PersonSummary::ZERO);
        assert!(s.balance.is_zero());
    }

    #[test]
    fn participant_summary_flattens_fields() {
        let person = Person::new(PersonId(1), "A");
        let row = ParticipantSummary::new(
            &person,
            PersonSummary {
                total_paid: Decimal::new(100, 0),
                total_should: Decimal::new(50, 0),
                balance: Decimal::new(50, 0),
            },
        );
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""person_id":1"#), "Got: {json}");
        assert!(json.contains(r#""total_paid":"100""#), "Got: {json}");
        let back: ParticipantSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }

    #[test]
    fn to_balance_keeps_identity() {
        let person = Person::new(PersonId(4), "D");
        let row = ParticipantSummary::new(
            &person,
            PersonSummary {
                total_paid: Decimal::ZERO,
                total_should: Decimal::new(3333, 2),
                balance: Decimal::new(-3333, 2),
            },
        );
        let balance = row.to_balance();
        assert_eq!(balance.person_id, PersonId(4));
        assert_eq!(balance.name, "D");
        assert_eq!(balance.balance, Decimal::new(-3333, 2));
    }
}
