//! `splitledger check`: validate a ledger and verify the engine's
//! invariants on it.
//!
//! Fails (non-zero exit) on the first hard validation error, conservation
//! violation, or unsettled residual.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use splitledger_ledger::{ConservationCheck, validate_ledger};
use splitledger_settlement::{SettlementReport, residual_tolerance, verify_settlement};
use splitledger_types::SettlementConfig;

use crate::{OutputFormat, input};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Ledger snapshot (JSON), or `-` for stdin.
    pub ledger: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct CheckOutput {
    warnings: Vec<String>,
    total_expenses: Decimal,
    total_paid: Decimal,
    total_owed: Decimal,
    net_balance: Decimal,
    transfers: usize,
}

pub fn run(args: &CheckArgs, config: &SettlementConfig) -> anyhow::Result<()> {
    let ledger = input::load_ledger(&args.ledger)?;

    let warnings = validate_ledger(&ledger).context("ledger validation failed")?;

    let report = SettlementReport::build(&ledger, config);
    let totals = ConservationCheck::from_config(config)
        .verify(&report.summaries, &ledger.expenses)
        .context("conservation check failed")?;

    let balances = report.balances();
    verify_settlement(
        &balances,
        &report.transfers,
        residual_tolerance(config, &balances),
    )
    .context("settlement verification failed")?;

    let output = CheckOutput {
        warnings: warnings.iter().map(ToString::to_string).collect(),
        total_expenses: totals.expenses,
        total_paid: totals.paid,
        total_owed: totals.should,
        net_balance: totals.net,
        transfers: report.transfers.len(),
    };

    match args.format {
        OutputFormat::Text => {
            for warning in &output.warnings {
                println!("warning: {warning}");
            }
            println!(
                "ok: {} participants, {} expenses, total {}, net drift {}, {} transfers",
                ledger.persons.len(),
                ledger.expenses.len(),
                output.total_expenses,
                output.net_balance,
                output.transfers,
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}
