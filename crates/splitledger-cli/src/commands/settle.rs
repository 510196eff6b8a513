//! `splitledger settle`: transfers that zero every balance.

use std::path::PathBuf;

use clap::Args;
use splitledger_settlement::SettlementReport;
use splitledger_types::SettlementConfig;

use crate::{OutputFormat, input, render};

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Ledger snapshot (JSON), or `-` for stdin.
    pub ledger: PathBuf,

    /// Output format. `json` prints the full report.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn run(args: &SettleArgs, config: &SettlementConfig) -> anyhow::Result<()> {
    let ledger = input::load_ledger(&args.ledger)?;
    let report = SettlementReport::build(&ledger, config);

    match args.format {
        OutputFormat::Text => print!("{}", render::transfer_list(&report.transfers, config.precision)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
