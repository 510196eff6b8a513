//! Money rounding helpers.
//!
//! Every presented amount is rounded half away from zero, so `-0.005`
//! becomes `-0.01` just like `0.005` becomes `0.01`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to `dp` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
