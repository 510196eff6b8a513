//! Ledger validation: the gate in front of the calculator.
//!
//! The calculator assumes a well-formed snapshot: unique participant ids,
//! non-negative amounts, non-empty participant lists, and no references to
//! unknown people. Collaborators that build ledgers from untrusted input
//! (forms, spreadsheet imports) run the [`LedgerValidator`] first.
//!
//! Hard problems are returned as errors (fail-closed on the first one).
//! Oddities the calculator handles fine are returned as warnings.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use splitledger_types::{
    Expense, ExpenseId, Ledger, Person, PersonId, Result, SplitledgerError,
};

/// A non-fatal finding about an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    /// The payer does not share the expense themselves.
    PayerNotSharing { expense: ExpenseId, payer: PersonId },
    /// The expense amount is zero.
    ZeroAmount(ExpenseId),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayerNotSharing { expense, payer } => {
                write!(f, "{expense}: payer {payer} is not among the participants")
            }
            Self::ZeroAmount(expense) => write!(f, "{expense}: amount is zero"),
        }
    }
}

/// Validates expenses against a known participant collection.
pub struct LedgerValidator {
    /// Ids of every known participant.
    known: HashSet<PersonId>,
}

impl LedgerValidator {
    /// Build a validator for a participant collection.
    ///
    /// # Errors
    /// Returns [`SplitledgerError::DuplicatePerson`] if two participants
    /// share an id.
    pub fn for_persons(persons: &[Person]) -> Result<Self> {
        let mut known = HashSet::with_capacity(persons.len());
        for person in persons {
            if !known.insert(person.id) {
                return Err(SplitledgerError::DuplicatePerson(person.id));
            }
        }
        Ok(Self { known })
    }

    /// Whether `id` belongs to a known participant.
    #[must_use]
    pub fn is_known(&self, id: PersonId) -> bool {
        self.known.contains(&id)
    }

    /// Validate a single expense.
    ///
    /// # Errors
    /// Returns the first hard problem found, checked in this order:
    /// negative amount, empty participants, unknown payer, unknown or
    /// duplicated participant.
    pub fn validate_expense(&self, expense: &Expense) -> Result<Vec<ValidationWarning>> {
        // 1. Amount
        if expense.amount < Decimal::ZERO {
            return Err(SplitledgerError::NegativeAmount {
                expense: expense.id,
                amount: expense.amount,
            });
        }

        // 2. Someone has to share it
        if expense.participants.is_empty() {
            return Err(SplitledgerError::EmptyParticipants(expense.id));
        }

        // 3. Referential integrity
        if !self.is_known(expense.payer) {
            return Err(SplitledgerError::UnknownPayer {
                expense: expense.id,
                payer: expense.payer,
            });
        }

        let mut seen = HashSet::with_capacity(expense.participants.len());
        for &person in &expense.participants {
            if !self.is_known(person) {
                return Err(SplitledgerError::UnknownParticipant {
                    expense: expense.id,
                    person,
                });
            }
            if !seen.insert(person) {
                return Err(SplitledgerError::DuplicateParticipant {
                    expense: expense.id,
                    person,
                });
            }
        }

        // 4. Soft findings
        let mut warnings = Vec::new();
        if expense.amount == Decimal::ZERO {
            warnings.push(ValidationWarning::ZeroAmount(expense.id));
        }
        if !expense.is_shared_by(expense.payer) {
            warnings.push(ValidationWarning::PayerNotSharing {
                expense: expense.id,
                payer: expense.payer,
            });
        }
        Ok(warnings)
    }

    /// Validate every expense, collecting warnings in ledger order.
    pub fn validate_all(&self, expenses: &[Expense]) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();
        for expense in expenses {
            warnings.extend(self.validate_expense(expense)?);
        }
        Ok(warnings)
    }
}

/// Validate a whole ledger snapshot.
///
/// Warnings are also logged at `warn` level.
pub fn validate_ledger(ledger: &Ledger) -> Result<Vec<ValidationWarning>> {
    let validator = LedgerValidator::for_persons(&ledger.persons)?;
    let warnings = validator.validate_all(&ledger.expenses)?;
    for warning in &warnings {
        tracing::warn!(%warning, "Ledger validation warning");
    }
    Ok(warnings)
}
