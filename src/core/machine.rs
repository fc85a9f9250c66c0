//! State machine that follows string-labelled edges between named states.

use crate::core::error::MachineError;
use crate::core::policy::{UndefinedPolicy, DOOM_STATE};
use crate::core::state::State;
use std::collections::HashMap;

/// A finite state machine over an owned, fixed set of states.
///
/// States are stored in construction order and addressed by index; a name
/// index gives O(1) lookups. All transition targets are checked when the
/// machine is built, so [`apply`](Self::apply) can never land on an unknown
/// state.
///
/// # Example
///
/// ```rust
/// use edgewise::core::{State, StateMachine, UndefinedPolicy};
///
/// let states = vec![
///     State::new("A").with_transition("go", "B"),
///     State::new("B"),
/// ];
/// let mut machine = StateMachine::new(states, "A", UndefinedPolicy::Stay).unwrap();
///
/// assert_eq!(machine.apply("go").name(), "B");
/// assert_eq!(machine.apply("go").name(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    states: Vec<State>,
    index: HashMap<String, usize>,
    current: usize,
    policy: UndefinedPolicy,
}

impl StateMachine {
    /// Build a machine from `states`, starting at `start`.
    ///
    /// Checks run in order and the first failure is returned:
    /// unknown `start`, a caller-supplied `Doom` state under the doom policy,
    /// duplicate names, then edges pointing at unknown states. Under
    /// [`UndefinedPolicy::Doom`] a transition-less `Doom` state is appended
    /// before targets are checked, so edges may name it explicitly.
    pub fn new(
        mut states: Vec<State>,
        start: &str,
        policy: UndefinedPolicy,
    ) -> Result<Self, MachineError> {
        if !states.iter().any(|s| s.name() == start) {
            return Err(MachineError::InvalidStartState {
                start: start.to_string(),
            });
        }

        if policy == UndefinedPolicy::Doom && states.iter().any(|s| s.name() == DOOM_STATE) {
            return Err(MachineError::ReservedStateName {
                name: DOOM_STATE.to_string(),
            });
        }

        let mut index = HashMap::with_capacity(states.len() + 1);
        for (position, state) in states.iter().enumerate() {
            if index.insert(state.name().to_string(), position).is_some() {
                return Err(MachineError::DuplicateState {
                    name: state.name().to_string(),
                });
            }
        }

        if policy == UndefinedPolicy::Doom {
            index.insert(DOOM_STATE.to_string(), states.len());
            states.push(State::new(DOOM_STATE));
        }

        for state in &states {
            for (edge, target) in state.transitions() {
                if !index.contains_key(target) {
                    return Err(MachineError::DanglingTransitionTarget {
                        state: state.name().to_string(),
                        edge: edge.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let current = index[start];

        Ok(Self {
            states,
            index,
            current,
            policy,
        })
    }

    /// Build a machine with the default [`UndefinedPolicy::Stay`].
    pub fn with_defaults(states: Vec<State>, start: &str) -> Result<Self, MachineError> {
        Self::new(states, start, UndefinedPolicy::default())
    }

    /// Look a state up by name.
    pub fn get_state(&self, name: &str) -> Result<&State, MachineError> {
        self.index
            .get(name)
            .map(|&position| &self.states[position])
            .ok_or_else(|| MachineError::StateNotFound {
                name: name.to_string(),
            })
    }

    /// Follow `edge` from the current state and return the new current state.
    ///
    /// An edge the current state does not define leaves the machine where it
    /// is under [`UndefinedPolicy::Stay`] and moves it to `Doom` under
    /// [`UndefinedPolicy::Doom`]. Only the current position changes.
    pub fn apply(&mut self, edge: &str) -> &State {
        let next = match self.states[self.current].target(edge) {
            Some(target) => Some(self.index[target]),
            None => match self.policy {
                UndefinedPolicy::Stay => None,
                UndefinedPolicy::Doom => Some(self.index[DOOM_STATE]),
            },
        };

        if let Some(next) = next {
            self.current = next;
        }

        &self.states[self.current]
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &State {
        &self.states[self.current]
    }

    /// Name of the current state.
    pub fn current_name(&self) -> &str {
        self.states[self.current].name()
    }

    /// Policy applied to undefined edges.
    pub fn policy(&self) -> UndefinedPolicy {
        self.policy
    }

    /// All states in construction order, including `Doom` when present.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Check if a state with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Check if the machine has fallen into the doom sink.
    pub fn is_doomed(&self) -> bool {
        self.policy == UndefinedPolicy::Doom && self.current_name() == DOOM_STATE
    }
}
