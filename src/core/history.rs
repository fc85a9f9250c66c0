//! Edge-by-edge history of a running machine.
//!
//! The machine itself keeps no record of where it has been; callers that
//! want an audit trail record each applied edge here. History values are
//! immutable: [`StateHistory::record`] returns a new history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied edge.
///
/// `from == to` is normal: it is what an undefined edge under the stay
/// policy, or a self-loop, looks like.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state the edge was applied in
    pub from: String,
    /// Name of the state the machine ended up in
    pub to: String,
    /// The edge label that was applied
    pub edge: String,
    /// When the edge was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Create a record stamped with the current time.
    pub fn now(from: impl Into<String>, to: impl Into<String>, edge: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge: edge.into(),
            timestamp: Utc::now(),
        }
    }

    /// Check if the edge actually moved the machine.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of applied edges.
///
/// # Example
///
/// ```rust
/// use edgewise::core::{StateHistory, TransitionRecord};
///
/// let history = StateHistory::new()
///     .record(TransitionRecord::now("Sleep", "Select", "wake"))
///     .record(TransitionRecord::now("Select", "Payment", "selected"));
///
/// assert_eq!(history.get_path(), vec!["Sleep", "Select", "Payment"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    ///
    /// Use this when the history is owned by a long-running session;
    /// [`record`](Self::record) copies every earlier entry.
    pub fn push(&mut self, transition: TransitionRecord) {
        self.transitions.push(transition);
    }

    /// Names of the states visited, starting with the first `from`.
    ///
    /// Edges that did not move the machine are skipped, so the path lists
    /// each visit once.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in self.transitions.iter().filter(|t| t.moved()) {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last recorded edge.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
