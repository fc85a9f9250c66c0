//! Edgewise: a small string-labelled finite state machine engine.
//!
//! A machine owns a fixed set of named states. Each state maps edge labels
//! to the names of target states. Applying an edge moves the machine along
//! it, or, when the current state does not define the edge, either leaves
//! the machine where it is or drops it into a `Doom` sink, depending on the
//! machine's [`UndefinedPolicy`].
//!
//! # Core Concepts
//!
//! - **State**: a named node with a transition table and an accepting flag
//! - **StateMachine**: owns the states, validates them up front, follows edges
//! - **History**: immutable, timestamped record of applied edges
//!
//! The [`vending`] module builds an interactive vending machine on top of
//! the engine.
//!
//! # Example
//!
//! ```rust
//! use edgewise::core::{StateMachine, UndefinedPolicy};
//! use edgewise::state;
//!
//! let states = vec![
//!     state!("Sleep" => { "wake" => "Select" }),
//!     state!("Select" => { "cancel" => "Sleep", "selected" => "Payment" }),
//!     state!("Payment"),
//! ];
//!
//! let mut machine = StateMachine::new(states, "Sleep", UndefinedPolicy::Stay).unwrap();
//! machine.apply("wake");
//! machine.apply("selected");
//! assert_eq!(machine.apply("anything-unmapped").name(), "Payment");
//! ```

pub mod builder;
pub mod core;
pub mod vending;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{
    MachineError, State, StateHistory, StateMachine, TransitionRecord, UndefinedPolicy,
};
