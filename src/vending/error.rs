//! Errors raised while setting up or running a vending session.

use crate::builder::BuildError;
use crate::vending::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendingError {
    #[error("Failed to build vending state machine: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("No product selected in state '{state}'")]
    NoSelection { state: String },

    #[error("Machine reached unexpected state '{0}'")]
    UnexpectedState(String),
}
