//! Greedy settlement reducer.
//!
//! Takes every participant's balance and produces a short list of
//! transfers that brings all of them to zero:
//!
//! ```text
//! settle(persons, expenses) -> Vec<Transfer>
//! ```
//!
//! ## Algorithm
//!
//! 1. Summarize every participant (participant order)
//! 2. Partition into creditors (balance > +dead_zone) and debtors
//!    (balance < -dead_zone, kept as a positive magnitude)
//! 3. Walk both lists with one cursor each. At every step move
//!    `min(creditor, debtor)` from the debtor to the creditor, then advance
//!    whichever cursor dropped below the dead zone (both on an exact match)
//! 4. Stop when either list is exhausted
//!
//! Every step empties at least one side, and an empty side always
//! advances, so the walk terminates with at most `creditors + debtors - 1`
//! transfers. A negative dead zone is treated as zero. Lists are matched in their natural
//! order and never sorted by magnitude: the output order is part of the
//! contract.

use rust_decimal::Decimal;
use splitledger_ledger::summarize_all_with_precision;
use splitledger_types::{Expense, Person, PersonBalance, SettlementConfig, Transfer, round_to};

/// Settle a snapshot with the default configuration (cents, ±0.01).
///
/// Returns an empty list when every balance is already inside the dead
/// zone.
#[must_use]
pub fn settle(persons: &[Person], expenses: &[Expense]) -> Vec<Transfer> {
    settle_with(persons, expenses, &SettlementConfig::default())
}

/// Settle a snapshot with an explicit configuration.
#[must_use]
pub fn settle_with(
    persons: &[Person],
    expenses: &[Expense],
    config: &SettlementConfig,
) -> Vec<Transfer> {
    let balances: Vec<PersonBalance> =
        summarize_all_with_precision(persons, expenses, config.precision)
            .iter()
            .map(|row| row.to_balance())
            .collect();
    reduce_balances(&balances, config)
}

/// Split balances into creditors and debtors, dropping the dead zone.
///
/// Both lists keep input order. Debtor balances are returned as positive
/// magnitudes.
#[must_use]
pub fn partition(
    balances: &[PersonBalance],
    dead_zone: Decimal,
) -> (Vec<PersonBalance>, Vec<PersonBalance>) {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for entry in balances {
        if entry.balance > dead_zone {
            creditors.push(entry.clone());
        } else if entry.balance < -dead_zone {
            debtors.push(PersonBalance {
                balance: -entry.balance,
                ..entry.clone()
            });
        }
    }

    (creditors, debtors)
}

/// Run the two-pointer matching over precomputed balances.
#[must_use]
pub fn reduce_balances(balances: &[PersonBalance], config: &SettlementConfig) -> Vec<Transfer> {
    let dead_zone = config.dead_zone.max(Decimal::ZERO);
    let (mut creditors, mut debtors) = partition(balances, dead_zone);

    let mut transfers =
        Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
    let mut creditor_idx = 0;
    let mut debtor_idx = 0;

    while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
        let creditor = &mut creditors[creditor_idx];
        let debtor = &mut debtors[debtor_idx];

        let amount = creditor.balance.min(debtor.balance);

        if amount > dead_zone {
            let transfer = Transfer {
                from_id: debtor.person_id,
                from: debtor.name.clone(),
                to_id: creditor.person_id,
                to: creditor.name.clone(),
                amount: round_to(amount, config.precision),
            };

            tracing::debug!(
                from = %transfer.from_id,
                to = %transfer.to_id,
                amount = %transfer.amount,
                "Transfer matched"
            );

            transfers.push(transfer);
        }

        creditor.balance -= amount;
        debtor.balance -= amount;

        if creditor.balance < dead_zone || creditor.balance.is_zero() {
            creditor_idx += 1;
        }
        if debtor.balance < dead_zone || debtor.balance.is_zero() {
            debtor_idx += 1;
        }
    }

    tracing::info!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = transfers.len(),
        "Settlement reduced"
    );

    transfers
}

#[cfg(test)]
mod tests {
    use splitledger_types::*;

    use super::*;

    fn d(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn bal(id: u64, cents: i64) -> PersonBalance {
        let person = Person::dummy(id);
        PersonBalance::new(person.id, person.name, d(cents))
    }

    fn pairs(transfers: &[Transfer]) -> Vec<(&str, &str, Decimal)> {
        transfers
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str(), t.amount))
            .collect()
    }

    #[test]
    fn empty_inputs_settle_to_nothing() {
        assert!(settle(&[], &[]).is_empty());
        assert!(settle(&[Person::dummy(1), Person::dummy(2)], &[]).is_empty());
    }

    #[test]
    fn partition_excludes_dead_zone() {
        let balances = vec![bal(1, 1), bal(2, -1), bal(3, 2), bal(4, -2), bal(5, 0)];
        let (creditors, debtors) = partition(&balances, constants::DEAD_ZONE);
        assert_eq!(creditors.len(), 1);
        assert_eq!(creditors[0].person_id, PersonId(3));
        assert_eq!(debtors.len(), 1);
        assert_eq!(debtors[0].person_id, PersonId(4));
        assert_eq!(debtors[0].balance, d(2));
    }

    #[test]
    fn single_pair() {
        let transfers = reduce_balances(&[bal(1, 5_000), bal(2, -5_000)], &SettlementConfig::default());
        assert_eq!(pairs(&transfers), vec![("B", "A", d(5_000))]);
        assert_eq!(transfers[0].from_id, PersonId(2));
        assert_eq!(transfers[0].to_id, PersonId(1));
    }

    #[test]
    fn list_order_not_magnitude_order() {
        // Creditors A(10), B(30); debtors C(30), D(10).
        // Sorting by magnitude would pair B<-C and A<-D in two transfers;
        // list order gives three.
        let balances = vec![bal(1, 1_000), bal(2, 3_000), bal(3, -3_000), bal(4, -1_000)];
        let transfers = reduce_balances(&balances, &SettlementConfig::default());
        assert_eq!(
            pairs(&transfers),
            vec![
                ("C", "A", d(1_000)),
                ("C", "B", d(2_000)),
                ("D", "B", d(1_000)),
            ]
        );
    }

    #[test]
    fn exact_match_advances_both_cursors() {
        let balances = vec![bal(1, 2_000), bal(2, -2_000), bal(3, 1_500), bal(4, -1_500)];
        let transfers = reduce_balances(&balances, &SettlementConfig::default());
        assert_eq!(
            pairs(&transfers),
            vec![("B", "A", d(2_000)), ("D", "C", d(1_500))]
        );
    }

    #[test]
    fn dead_zone_debtor_is_never_listed() {
        let balances = vec![bal(1, 2), bal(2, 3), bal(3, -4), bal(4, -1)];
        let transfers = reduce_balances(&balances, &SettlementConfig::default());
        // C pays A 0.02, then C's last 0.02 goes to B, leaving B at 0.01.
        // D at -0.01 sits inside the dead zone.
        assert_eq!(
            pairs(&transfers),
            vec![("C", "A", d(2)), ("C", "B", d(2))]
        );
    }

    #[test]
    fn skipped_cent_still_consumes_balance() {
        // After B pays A 0.02, A is owed 0.01: still a creditor, but the
        // 0.01 step against C is matched without emitting a transfer.
        let balances = vec![bal(1, 3), bal(2, -2), bal(3, -2)];
        let transfers = reduce_balances(&balances, &SettlementConfig::default());
        assert_eq!(pairs(&transfers), vec![("B", "A", d(2))]);
    }

    #[test]
    fn transfer_count_bound() {
        let balances = vec![
            bal(1, 7_000),
            bal(2, -2_500),
            bal(3, 1_000),
            bal(4, -4_000),
            bal(5, -1_500),
            bal(6, 0),
        ];
        let transfers = reduce_balances(&balances, &SettlementConfig::default());
        // 2 creditors + 3 debtors - 1
        assert!(transfers.len() <= 4, "got {}", transfers.len());
        assert_eq!(total_transferred(&transfers), d(8_000));
    }

    #[test]
    fn settle_is_idempotent() {
        let persons = vec![Person::dummy(1), Person::dummy(2), Person::dummy(3)];
        let expenses = vec![
            Expense::dummy(1, d(9_000), 1, &[1, 2, 3]),
            Expense::dummy(2, d(1_250), 3, &[2, 3]),
        ];
        assert_eq!(settle(&persons, &expenses), settle(&persons, &expenses));
    }

    #[test]
    fn wider_dead_zone_swallows_small_debts() {
        let persons = vec![Person::dummy(1), Person::dummy(2)];
        let expenses = vec![Expense::dummy(1, d(80), 1, &[1, 2])];
        assert_eq!(settle(&persons, &expenses).len(), 1);

        let config = SettlementConfig {
            dead_zone: d(50),
            ..SettlementConfig::default()
        };
        assert!(settle_with(&persons, &expenses, &config).is_empty());
    }

    #[test]
    fn zero_dead_zone_terminates() {
        let persons = vec![Person::dummy(1), Person::dummy(2)];
        let expenses = vec![Expense::dummy(1, d(10_000), 1, &[1, 2])];
        let config = SettlementConfig {
            dead_zone: Decimal::ZERO,
            ..SettlementConfig::default()
        };
        let transfers = settle_with(&persons, &expenses, &config);
        assert_eq!(pairs(&transfers), vec![("B", "A", d(5_000))]);
    }

    #[test]
    fn zero_dead_zone_lists_single_cents() {
        let config = SettlementConfig {
            dead_zone: Decimal::ZERO,
            ..SettlementConfig::default()
        };
        let balances = vec![bal(1, 1), bal(2, 2_000), bal(3, -2_000), bal(4, -1)];
        let transfers = reduce_balances(&balances, &config);
        assert_eq!(
            pairs(&transfers),
            vec![("C", "A", d(1)), ("C", "B", d(1_999)), ("D", "B", d(1))]
        );
    }

    #[test]
    fn negative_dead_zone_behaves_like_zero() {
        let balances = vec![bal(1, 2_000), bal(2, -2_000), bal(3, 1_500), bal(4, -1_500)];
        let negative = SettlementConfig {
            dead_zone: d(-50),
            ..SettlementConfig::default()
        };
        let zero = SettlementConfig {
            dead_zone: Decimal::ZERO,
            ..SettlementConfig::default()
        };
        let transfers = reduce_balances(&balances, &negative);
        assert_eq!(transfers, reduce_balances(&balances, &zero));
        assert_eq!(
            pairs(&transfers),
            vec![("B", "A", d(2_000)), ("D", "C", d(1_500))]
        );
    }
}
