//! Settlement report: everything a display or export layer needs from one
//! snapshot, computed in one pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_ledger::summarize_all_with_precision;
use splitledger_types::{Ledger, ParticipantSummary, PersonBalance, SettlementConfig, Transfer};

use crate::reducer::reduce_balances;

/// Totals, per-person summaries and transfers for one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Sum of every expense amount.
    pub total_expenses: Decimal,
    /// One row per participant, in participant order.
    pub summaries: Vec<ParticipantSummary>,
    /// Transfers in construction order.
    pub transfers: Vec<Transfer>,
}

impl SettlementReport {
    /// Summarize and settle `ledger`.
    #[must_use]
    pub fn build(ledger: &Ledger, config: &SettlementConfig) -> Self {
        let summaries =
            summarize_all_with_precision(&ledger.persons, &ledger.expenses, config.precision);
        let balances: Vec<PersonBalance> =
            summaries.iter().map(ParticipantSummary::to_balance).collect();
        let transfers = reduce_balances(&balances, config);

        Self {
            total_expenses: ledger.total_expenses(),
            summaries,
            transfers,
        }
    }

    /// `true` when no transfer is needed.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Signed balances in participant order.
    #[must_use]
    pub fn balances(&self) -> Vec<PersonBalance> {
        self.summaries.iter().map(ParticipantSummary::to_balance).collect()
    }
}

#[cfg(test)]
mod tests {
    use splitledger_types::*;

    use super::*;

    #[test]
    fn report_for_two_person_split() {
        let ledger = Ledger::new(
            vec![Person::dummy(1), Person::dummy(2)],
            vec![Expense::dummy(1, Decimal::new(100, 0), 1, &[1, 2])],
        );
        let report = SettlementReport::build(&ledger, &SettlementConfig::default());
        assert_eq!(report.total_expenses, Decimal::new(100, 0));
        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.transfers.len(), 1);
        assert!(!report.is_balanced());
        assert_eq!(report.balances()[1].balance, Decimal::new(-50, 0));
    }

    #[test]
    fn empty_ledger_is_balanced() {
        let report = SettlementReport::build(&Ledger::default(), &SettlementConfig::default());
        assert!(report.is_balanced());
        assert!(report.summaries.is_empty());
        assert_eq!(report.total_expenses, Decimal::ZERO);
    }

    #[test]
    fn report_serde_roundtrip() {
        let ledger = Ledger::new(
            vec![Person::dummy(1), Person::dummy(2), Person::dummy(3)],
            vec![Expense::dummy(1, Decimal::new(9000, 2), 1, &[1, 2, 3])],
        );
        let report = SettlementReport::build(&ledger, &SettlementConfig::default());
        let json = serde_json::to_string(&report).unwrap();
        let back: SettlementReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
