//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - `State` nodes with edge-label transition tables
//! - `StateMachine`, which owns the states and follows edges
//! - `UndefinedPolicy` for edges a state does not define
//! - Immutable history tracking for callers that want an audit trail
//!
//! Nothing in this module logs or performs I/O.

mod error;
mod history;
mod machine;
mod policy;
mod state;

pub use error::MachineError;
pub use history::{StateHistory, TransitionRecord};
pub use machine::StateMachine;
pub use policy::{ParsePolicyError, UndefinedPolicy, DOOM_STATE};
pub use state::{State, TransitionTable};
