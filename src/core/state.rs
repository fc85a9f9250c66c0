//! A single node of a state machine and its outgoing edges.
//!
//! States are plain values: a name, a table mapping edge labels to the
//! names of target states, and an accepting flag. Nothing here checks that
//! a target actually exists; that is the owning [`StateMachine`]'s job.
//!
//! [`StateMachine`]: crate::core::StateMachine

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Edge label → target state name.
pub type TransitionTable = BTreeMap<String, String>;

/// A named state with its transition table.
///
/// # Example
///
/// ```rust
/// use edgewise::core::State;
///
/// let mut select = State::new("Select");
/// select
///     .define_transition("cancel", "Sleep")
///     .define_transition("selected", "Payment");
///
/// assert_eq!(select.target("cancel"), Some("Sleep"));
/// assert_eq!(select.transitions().len(), 2);
/// assert!(!select.is_accepting());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    name: String,
    #[serde(default)]
    transitions: TransitionTable,
    #[serde(default)]
    accepting: bool,
}

impl State {
    /// Create a state with no transitions that is not accepting.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: TransitionTable::new(),
            accepting: false,
        }
    }

    /// Create a state with an initial transition table.
    ///
    /// ```rust
    /// use edgewise::core::State;
    ///
    /// let sleep = State::with_transitions("Sleep", [("wake", "Select")]);
    /// assert_eq!(sleep.target("wake"), Some("Select"));
    /// ```
    pub fn with_transitions<I, E, T>(name: impl Into<String>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        let transitions = transitions
            .into_iter()
            .map(|(edge, target)| (edge.into(), target.into()))
            .collect();

        Self {
            name: name.into(),
            transitions,
            accepting: false,
        }
    }

    /// Set the accepting flag, consuming and returning the state.
    pub fn accepting(mut self, accepting: bool) -> Self {
        self.accepting = accepting;
        self
    }

    /// Insert or overwrite the edge `edge → target`.
    ///
    /// Returns `self` so several definitions can be chained on one state.
    pub fn define_transition(
        &mut self,
        edge: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Self {
        self.transitions.insert(edge.into(), target.into());
        self
    }

    /// By-value form of [`define_transition`](Self::define_transition).
    pub fn with_transition(mut self, edge: impl Into<String>, target: impl Into<String>) -> Self {
        self.define_transition(edge, target);
        self
    }

    /// Get the state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges, sorted by label.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Target state name for `edge`, if this state defines it.
    pub fn target(&self, edge: &str) -> Option<&str> {
        self.transitions.get(edge).map(String::as_str)
    }

    /// Informational only; the machine never stops on an accepting state.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}
