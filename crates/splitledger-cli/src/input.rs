//! Loading ledger snapshots and settlement config.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use splitledger_types::{Ledger, SettlementConfig};

/// Read a ledger snapshot from `path`, or from stdin when `path` is `-`.
pub fn load_ledger(path: &Path) -> anyhow::Result<Ledger> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading ledger from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading ledger {}", path.display()))?
    };

    let ledger = parse_ledger(&raw).with_context(|| format!("parsing ledger {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        persons = ledger.persons.len(),
        expenses = ledger.expenses.len(),
        "Ledger loaded"
    );
    Ok(ledger)
}

pub fn parse_ledger(raw: &str) -> anyhow::Result<Ledger> {
    Ok(serde_json::from_str(raw)?)
}

/// Config file (if any), then flag overrides, then validation.
pub fn load_config(
    path: Option<&Path>,
    dead_zone: Option<Decimal>,
    precision: Option<u32>,
) -> anyhow::Result<SettlementConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SettlementConfig::from_json(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SettlementConfig::default(),
    };

    apply_overrides(&mut config, dead_zone, precision);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut SettlementConfig, dead_zone: Option<Decimal>, precision: Option<u32>) {
    if let Some(dead_zone) = dead_zone {
        config.dead_zone = dead_zone;
    }
    if let Some(precision) = precision {
        config.precision = precision;
    }
}
