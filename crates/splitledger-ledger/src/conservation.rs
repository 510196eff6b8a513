//! Conservation invariant checker.
//!
//! Money is neither created nor destroyed by splitting it:
//! ```text
//! Σ total_paid   == Σ expense.amount
//! Σ total_should == Σ expense.amount
//! Σ balance      == 0
//! ```
//!
//! Summaries are rounded per person, so each sum may drift by up to half a
//! unit of the last decimal place per participant. The check allows
//! `max(dead_zone, n × half_unit)` for `n` summaries.
//!
//! Only meaningful for a validated ledger: expenses naming unknown people
//! put money outside the summarized population.

use rust_decimal::Decimal;
use splitledger_types::{
    Expense, ParticipantSummary, Result, SettlementConfig, SplitledgerError, constants,
};

/// Aggregates compared by [`ConservationCheck::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConservationTotals {
    /// Σ expense amounts.
    pub expenses: Decimal,
    /// Σ total_paid over all summaries.
    pub paid: Decimal,
    /// Σ total_should over all summaries.
    pub should: Decimal,
    /// Σ balance over all summaries.
    pub net: Decimal,
}

impl ConservationTotals {
    #[must_use]
    pub fn collect(summaries: &[ParticipantSummary], expenses: &[Expense]) -> Self {
        let mut totals = Self {
            expenses: expenses.iter().map(|e| e.amount).sum(),
            paid: Decimal::ZERO,
            should: Decimal::ZERO,
            net: Decimal::ZERO,
        };
        for row in summaries {
            totals.paid += row.summary.total_paid;
            totals.should += row.summary.total_should;
            totals.net += row.summary.balance;
        }
        totals
    }
}

/// Verifies that a set of summaries conserves the expense pool.
pub struct ConservationCheck {
    /// Lower bound of the allowed drift.
    dead_zone: Decimal,
    /// Worst-case rounding error of one rounded value.
    half_unit: Decimal,
}

impl ConservationCheck {
    /// Check matching the default cent precision and ±0.01 dead zone.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SettlementConfig::default())
    }

    #[must_use]
    pub fn from_config(config: &SettlementConfig) -> Self {
        Self {
            dead_zone: config.dead_zone,
            half_unit: Decimal::new(5, (config.precision + 1).min(constants::MAX_PRECISION)),
        }
    }

    /// Allowed absolute drift for `persons` rounded summaries.
    #[must_use]
    pub fn tolerance(&self, persons: usize) -> Decimal {
        self.dead_zone.max(self.half_unit * Decimal::from(persons))
    }

    /// Verify paid, owed and net totals against the expense pool.
    ///
    /// # Errors
    /// Returns [`SplitledgerError::ConservationViolation`] naming the first
    /// aggregate that drifts beyond [`tolerance`](Self::tolerance).
    pub fn verify(
        &self,
        summaries: &[ParticipantSummary],
        expenses: &[Expense],
    ) -> Result<ConservationTotals> {
        let totals = ConservationTotals::collect(summaries, expenses);
        let tolerance = self.tolerance(summaries.len());

        let checks = [
            ("total paid", totals.paid, totals.expenses),
            ("total owed", totals.should, totals.expenses),
            ("net balance", totals.net, Decimal::ZERO),
        ];
        for (label, actual, expected) in checks {
            if (actual - expected).abs() > tolerance {
                return Err(SplitledgerError::ConservationViolation {
                    reason: format!(
                        "{label} {actual} != expected {expected} (tolerance {tolerance})"
                    ),
                });
            }
        }

        Ok(totals)
    }
}

impl Default for ConservationCheck {
    fn default() -> Self {
        Self::new()
    }
}
