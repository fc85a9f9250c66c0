//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Interactive vending machine.
#[derive(Parser, Debug, Clone)]
#[command(name = "vending")]
#[command(about = "Interactive vending machine driven by a finite state machine")]
#[command(version)]
pub struct Cli {
    /// JSON file with products, prices and payment settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Percentage of card payments to decline (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_chance: Option<u8>,

    /// Seed for the simulated payment gateway.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not scroll old output away between screens.
    #[arg(long)]
    pub no_clear: bool,

    /// Disable terminal colors.
    #[arg(long)]
    pub no_color: bool,

    /// Write the session history as JSON to this file on exit.
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
