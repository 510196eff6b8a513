//! Immutable ledger snapshot.
//!
//! A [`Ledger`] owns a copy of the participant and expense collections at
//! one point in time. The engine never holds references into caller-owned
//! state: callers build a snapshot, run the calculations on it, and throw
//! it away on the next change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Expense, Person, PersonId};

/// Participants and expenses at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Ledger {
    #[must_use]
    pub fn new(persons: Vec<Person>, expenses: Vec<Expense>) -> Self {
        Self { persons, expenses }
    }

    /// Look up a participant by id.
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Snapshot with `id` removed, together with every expense that names
    /// them as payer or participant.
    #[must_use]
    pub fn without_person(&self, id: PersonId) -> Self {
        Self {
            persons: self.persons.iter().filter(|p| p.id != id).cloned().collect(),
            expenses: self
                .expenses
                .iter()
                .filter(|e| !e.involves(id))
                .cloned()
                .collect(),
        }
    }

    /// Sum of every expense amount.
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Expenses ordered by when they occurred. Equal timestamps keep their
    /// ledger order.
    #[must_use]
    pub fn expenses_by_date(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by_key(|e| e.occurred_at());
        sorted
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.expenses.is_empty()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Ledger {
    /// Random but well-formed ledger: `persons` participants named by
    /// [`Person::dummy`], `expenses` expenses between 10.00 and 510.00 with a
    /// random payer and a random non-empty set of participants.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, persons: usize, expenses: usize) -> Self {
        use rand::seq::SliceRandom;

        let people: Vec<Person> = (1..=persons as u64).map(Person::dummy).collect();
        let mut records = Vec::with_capacity(expenses);
        if !people.is_empty() {
            for id in 1..=expenses as u64 {
                let payer = people.choose(rng).map_or(1, |p| p.id.0);
                let count = rng.gen_range(1..=people.len());
                let mut shared: Vec<u64> = people
                    .choose_multiple(rng, count)
                    .map(|p| p.id.0)
                    .collect();
                shared.sort_unstable();
                let amount = Decimal::new(rng.gen_range(1_000..=51_000), 2);
                records.push(Expense::dummy(id, amount, payer, &shared));
            }
        }
        Self::new(people, records)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sample() -> Ledger {
        Ledger::new(
            vec![Person::dummy(1), Person::dummy(2), Person::dummy(3)],
            vec![
                Expense::dummy(1, Decimal::new(90, 0), 1, &[1, 2, 3]),
                Expense::dummy(2, Decimal::new(40, 0), 2, &[1, 2]),
                Expense::dummy(3, Decimal::new(15, 0), 1, &[3]),
            ],
        )
    }

    #[test]
    fn total_expenses_sums_amounts() {
        assert_eq!(sample().total_expenses(), Decimal::new(145, 0));
        assert_eq!(Ledger::default().total_expenses(), Decimal::ZERO);
    }

    #[test]
    fn without_person_cascades_to_expenses() {
        let ledger = sample();
        let pruned = ledger.without_person(PersonId(3));
        assert_eq!(pruned.persons.len(), 2);
        assert!(pruned.person(PersonId(3)).is_none());
        // Expenses 1 (shared by 3) and 3 (shared by 3) are gone.
        assert_eq!(pruned.expenses.len(), 1);
        assert_eq!(pruned.expenses[0].id.0, 2);
        // The original snapshot is untouched.
        assert_eq!(ledger.expenses.len(), 3);
    }

    #[test]
    fn without_person_removes_payer_references() {
        let ledger = sample();
        let pruned = ledger.without_person(PersonId(2));
        assert!(pruned.expenses.iter().all(|e| e.payer != PersonId(2)));
        assert_eq!(pruned.expenses.len(), 1);
    }

    #[test]
    fn expenses_by_date_is_stable() {
        let mut ledger = sample();
        ledger.expenses[2].date = chrono::NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let ordered: Vec<u64> = ledger.expenses_by_date().iter().map(|e| e.id.0).collect();
        assert_eq!(ordered, vec![3, 1, 2]);
    }

    #[test]
    fn random_ledger_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        let ledger = Ledger::random(&mut rng, 5, 40);
        assert_eq!(ledger.persons.len(), 5);
        assert_eq!(ledger.expenses.len(), 40);
        for e in &ledger.expenses {
            assert!(!e.participants.is_empty());
            assert!(ledger.person(e.payer).is_some());
            assert!(e.participants.iter().all(|id| ledger.person(*id).is_some()));
            assert!(e.amount >= Decimal::new(10, 0));
        }
    }

    #[test]
    fn ledger_deserializes_with_missing_collections() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());
    }
}
