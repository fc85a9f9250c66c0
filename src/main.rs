//! Interactive vending machine binary.
//!
//! Reads commands line by line from stdin and renders each screen on
//! stdout. Logs go to stderr.

mod cli;

use std::io;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use edgewise::vending::color;
use edgewise::vending::{SessionReport, SimulatedGateway, VendingConfig, VendingMachine};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Set up logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if cli.no_color {
        color::set_enabled(false);
    }

    let config = build_config(&cli)?;
    let gateway = match cli.seed {
        Some(seed) => SimulatedGateway::seeded(config.payment_fail_chance, seed),
        None => SimulatedGateway::new(config.payment_fail_chance),
    };

    let mut vending = VendingMachine::new(config, gateway)?;
    let stdin = io::stdin();
    let outcome = vending.run(stdin.lock(), io::stdout());

    // Keep the history of a session that ended in an error too.
    if let Some(path) = &cli.transcript {
        write_transcript(path, &vending.report())?;
    }

    outcome?;
    Ok(())
}

fn write_transcript(path: &Path, report: &SessionReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write transcript to {}", path.display()))?;
    tracing::info!(path = %path.display(), "transcript written");
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<VendingConfig> {
    let mut config = match &cli.config {
        Some(path) => VendingConfig::from_json_file(path)?,
        None => VendingConfig::default(),
    };

    if let Some(chance) = cli.fail_chance {
        config.payment_fail_chance = chance;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }

    Ok(config)
}
