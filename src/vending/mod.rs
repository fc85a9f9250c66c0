//! Vending machine simulation on top of the core engine.
//!
//! This is the "imperative shell": console I/O, terminal colors, stock
//! keeping and simulated payments all live here. The engine only ever
//! sees edge labels.

pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod machine;
pub mod payment;

pub use config::{ConfigError, ConfigViolation, Product, VendingConfig};
pub use error::VendingError;
pub use machine::{build_machine, vending_states, SessionReport, VendingMachine};
pub use payment::{PaymentGateway, SimulatedGateway};
