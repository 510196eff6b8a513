//! Configuration for balance rounding and settlement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{SplitledgerError, Result, constants};

/// Tunables for the balance calculator and the settlement reducer.
///
/// The defaults reproduce cent rounding and the ±0.01 dead zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Balances within `[-dead_zone, +dead_zone]` are treated as settled.
    /// Must stay strictly positive to absorb rounding drift.
    pub dead_zone: Decimal,
    /// Decimal places for summaries and transfer amounts.
    pub precision: u32,
}

impl SettlementConfig {
    /// Reject values the reducer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.dead_zone <= Decimal::ZERO {
            return Err(SplitledgerError::Configuration(format!(
                "dead_zone must be positive, got {}",
                self.dead_zone
            )));
        }
        if self.precision > constants::MAX_PRECISION {
            return Err(SplitledgerError::Configuration(format!(
                "precision must be at most {}, got {}",
                constants::MAX_PRECISION,
                self.precision
            )));
        }
        Ok(())
    }

    /// Parse a JSON config and validate it. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            dead_zone: constants::DEAD_ZONE,
            precision: constants::CENT_PRECISION,
        }
    }
}
