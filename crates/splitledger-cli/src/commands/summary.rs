//! `splitledger summary`: per-participant paid / owed / balance.

use std::path::PathBuf;

use clap::Args;
use splitledger_ledger::summarize_all_with_precision;
use splitledger_types::SettlementConfig;

use crate::{OutputFormat, input, render};

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Ledger snapshot (JSON), or `-` for stdin.
    pub ledger: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn run(args: &SummaryArgs, config: &SettlementConfig) -> anyhow::Result<()> {
    let ledger = input::load_ledger(&args.ledger)?;
    let rows = summarize_all_with_precision(&ledger.persons, &ledger.expenses, config.precision);

    match args.format {
        OutputFormat::Text => print!(
            "{}",
            render::summary_table(&rows, ledger.total_expenses(), config.precision)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}
