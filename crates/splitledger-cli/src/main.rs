//! splitledger CLI: summarize and settle a shared-expense ledger.
//!
//! Subcommands: summary, settle, check.
//!
//! Reads a JSON ledger snapshot (`{"persons": [...], "expenses": [...]}`)
//! from a file or stdin (`-`). Results go to stdout, logs to stderr.

mod commands;
mod input;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use splitledger_types::constants::{ENGINE_NAME, VERSION};
use tracing_subscriber::EnvFilter;

/// splitledger: who owes whom, in as few transfers as possible.
#[derive(Parser, Debug)]
#[command(name = ENGINE_NAME, version = VERSION, about, long_about = None)]
struct Cli {
    /// Settlement config file (JSON). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the dead zone (balances within ± this are settled).
    #[arg(long, global = true)]
    dead_zone: Option<Decimal>,

    /// Override the number of decimal places.
    #[arg(long, global = true)]
    precision: Option<u32>,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print paid / owed / balance for every participant.
    Summary(commands::summary::SummaryArgs),
    /// Print the transfers that settle the ledger.
    Settle(commands::settle::SettleArgs),
    /// Validate the ledger and verify conservation and settlement.
    Check(commands::check::CheckArgs),
}

/// Output format shared by all subcommands.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.with_target(true).init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(engine = ENGINE_NAME, version = VERSION, "Starting");

    let config = input::load_config(cli.config.as_deref(), cli.dead_zone, cli.precision)?;
    tracing::debug!(
        dead_zone = %config.dead_zone,
        precision = config.precision,
        "Settlement config loaded"
    );

    match &cli.command {
        Commands::Summary(args) => commands::summary::run(args, &config),
        Commands::Settle(args) => commands::settle::run(args, &config),
        Commands::Check(args) => commands::check::run(args, &config),
    }
}
