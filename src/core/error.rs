//! Errors raised by state machine construction and lookup.

use thiserror::Error;

/// Errors that can occur when constructing or querying a [`StateMachine`].
///
/// All construction errors are fatal: no partially built machine is returned.
///
/// [`StateMachine`]: crate::core::StateMachine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Starting state '{start}' not in provided states")]
    InvalidStartState { start: String },

    #[error("State '{name}' not in available states")]
    StateNotFound { name: String },

    #[error("State '{state}' has edge '{edge}' to unknown state '{target}'")]
    DanglingTransitionTarget {
        state: String,
        edge: String,
        target: String,
    },

    #[error("State '{name}' is defined more than once")]
    DuplicateState { name: String },

    #[error("State name '{name}' is reserved for the doom sink")]
    ReservedStateName { name: String },
}
