//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateMachine, UndefinedPolicy};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use edgewise::builder::MachineBuilder;
/// use edgewise::core::UndefinedPolicy;
/// use edgewise::state;
///
/// let mut machine = MachineBuilder::new()
///     .state(state!("Red" => { "next" => "Green" }))
///     .state(state!("Green" => { "next" => "Yellow" }))
///     .state(state!("Yellow" => { "next" => "Red" }))
///     .start("Red")
///     .on_undefined(UndefinedPolicy::Doom)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.apply("next").name(), "Green");
/// assert_eq!(machine.apply("honk").name(), "Doom");
/// ```
#[derive(Debug, Default)]
pub struct MachineBuilder {
    states: Vec<State>,
    start: Option<String>,
    policy: UndefinedPolicy,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Add several states at once, keeping their order.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = State>,
    {
        self.states.extend(states);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Set the undefined-transition policy. Defaults to [`UndefinedPolicy::Stay`].
    pub fn on_undefined(mut self, policy: UndefinedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the machine is invalid.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let start = self.start.ok_or(BuildError::MissingStartState)?;

        Ok(StateMachine::new(self.states, &start, self.policy)?)
    }
}
