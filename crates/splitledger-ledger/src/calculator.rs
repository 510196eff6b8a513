//! Balance calculator.
//!
//! Reduces one participant's expense history to what they paid, what they
//! should have paid, and the signed difference:
//!
//! ```text
//! summarize(person, expenses) -> PersonSummary
//! ```
//!
//! Pure and total: no side effects, no errors, no cached state.

use rust_decimal::Decimal;
use splitledger_types::{
    Expense, ParticipantSummary, Person, PersonSummary, constants, round_to,
};

/// Summarize one participant at cent precision.
///
/// Expenses that don't involve `person` are ignored. A person with no
/// matching expenses gets an all-zero summary.
#[must_use]
pub fn summarize(person: &Person, expenses: &[Expense]) -> PersonSummary {
    summarize_with_precision(person, expenses, constants::CENT_PRECISION)
}

/// Summarize one participant, rounding to `precision` decimal places.
///
/// ## Algorithm
///
/// 1. `total_paid` += amount for every expense paid by `person`
/// 2. `total_should` += amount / |participants| for every expense shared
///    by `person` (exact decimal division, equal split)
/// 3. Round `total_paid`, `total_should` and their unrounded difference
///    independently, after accumulation
#[must_use]
pub fn summarize_with_precision(
    person: &Person,
    expenses: &[Expense],
    precision: u32,
) -> PersonSummary {
    let mut total_paid = Decimal::ZERO;
    let mut total_should = Decimal::ZERO;

    for expense in expenses {
        if expense.payer == person.id {
            total_paid += expense.amount;
        }
        if expense.is_shared_by(person.id) {
            // is_shared_by implies a non-empty participant list
            if let Some(share) = expense.share() {
                total_should += share;
            }
        }
    }

    PersonSummary {
        total_paid: round_to(total_paid, precision),
        total_should: round_to(total_should, precision),
        balance: round_to(total_paid - total_should, precision),
    }
}

/// Summarize every known participant, in participant order.
#[must_use]
pub fn summarize_all(persons: &[Person], expenses: &[Expense]) -> Vec<ParticipantSummary> {
    summarize_all_with_precision(persons, expenses, constants::CENT_PRECISION)
}

/// [`summarize_all`] at a configurable precision.
#[must_use]
pub fn summarize_all_with_precision(
    persons: &[Person],
    expenses: &[Expense],
    precision: u32,
) -> Vec<ParticipantSummary> {
    let summaries: Vec<ParticipantSummary> = persons
        .iter()
        .map(|person| {
            ParticipantSummary::new(
                person,
                summarize_with_precision(person, expenses, precision),
            )
        })
        .collect();

    tracing::debug!(
        persons = persons.len(),
        expenses = expenses.len(),
        "Summaries computed"
    );

    summaries
}
