//! Settlement verification.
//!
//! Replays a transfer list against the balances it was computed from and
//! checks what is left. A debtor's balance rises by every amount they pay;
//! a creditor's balance falls by every amount they receive.
//!
//! The reducer works inside a dead zone, so residuals are rarely exactly
//! zero. A participant the reducer finished with keeps at most two skipped
//! dead-zone steps. Whoever is left when the other side runs out also
//! holds the rounding drift of the listed balances.
//! [`residual_tolerance`] adds the two.

use std::collections::HashMap;

use rust_decimal::Decimal;
use splitledger_types::{
    PersonBalance, PersonId, Result, SettlementConfig, SplitledgerError, Transfer,
    constants,
};

/// Balances left over after every transfer has been applied.
///
/// # Errors
/// Returns [`SplitledgerError::PersonNotFound`] if a transfer names a
/// participant that has no balance entry.
pub fn apply_transfers(
    balances: &[PersonBalance],
    transfers: &[Transfer],
) -> Result<Vec<PersonBalance>> {
    let mut residuals = balances.to_vec();
    let index: HashMap<PersonId, usize> = residuals
        .iter()
        .enumerate()
        .map(|(idx, entry)| (entry.person_id, idx))
        .collect();

    for transfer in transfers {
        let from = *index
            .get(&transfer.from_id)
            .ok_or(SplitledgerError::PersonNotFound(transfer.from_id))?;
        let to = *index
            .get(&transfer.to_id)
            .ok_or(SplitledgerError::PersonNotFound(transfer.to_id))?;
        residuals[from].balance += transfer.amount;
        residuals[to].balance -= transfer.amount;
    }

    Ok(residuals)
}

/// Check that every residual lies within `tolerance` of zero.
///
/// # Errors
/// Returns [`SplitledgerError::UnsettledResidual`] for the first
/// participant outside the tolerance, or `PersonNotFound` from
/// [`apply_transfers`].
pub fn verify_settlement(
    balances: &[PersonBalance],
    transfers: &[Transfer],
    tolerance: Decimal,
) -> Result<()> {
    for entry in apply_transfers(balances, transfers)? {
        if entry.balance.abs() > tolerance {
            return Err(SplitledgerError::UnsettledResidual {
                person: entry.person_id,
                residual: entry.balance,
                tolerance,
            });
        }
    }
    Ok(())
}

/// Worst-case residual for any one participant after settling `balances`
/// under `config`.
///
/// When the precision unit is finer than the dead zone, every listed
/// participant can strand up to one dead zone on the other side, so the
/// bound grows with the number of listed balances.
#[must_use]
pub fn residual_tolerance(config: &SettlementConfig, balances: &[PersonBalance]) -> Decimal {
    let dead_zone = config.dead_zone.max(Decimal::ZERO);
    let listed: Vec<Decimal> = balances
        .iter()
        .map(|entry| entry.balance)
        .filter(|balance| balance.abs() > dead_zone)
        .collect();
    let drift = listed.iter().copied().sum::<Decimal>().abs();

    let mut tolerance = dead_zone * Decimal::TWO + drift;
    let unit = Decimal::new(1, config.precision.min(constants::MAX_PRECISION));
    if unit < dead_zone {
        tolerance += dead_zone * Decimal::from(listed.len());
    }
    tolerance
}
