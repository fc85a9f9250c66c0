//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and edge sequences.

use edgewise::core::{State, StateMachine, UndefinedPolicy, DOOM_STATE};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["A", "B", "C", "D"];
const EDGES: [&str; 4] = ["x", "y", "z", "w"];

prop_compose! {
    fn arbitrary_edge()(index in 0..EDGES.len()) -> String {
        EDGES[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_states()(
        tables in prop::collection::vec(
            prop::collection::vec((0..EDGES.len(), 0..NAMES.len()), 0..4),
            NAMES.len()
        )
    ) -> Vec<State> {
        tables
            .into_iter()
            .zip(NAMES)
            .map(|(table, name)| {
                let mut state = State::new(name);
                for (edge, target) in table {
                    state.define_transition(EDGES[edge], NAMES[target]);
                }
                state
            })
            .collect()
    }
}

fn arbitrary_policy() -> impl Strategy<Value = UndefinedPolicy> {
    prop_oneof![Just(UndefinedPolicy::Stay), Just(UndefinedPolicy::Doom)]
}

proptest! {
    #[test]
    fn current_state_always_resolves(
        states in arbitrary_states(),
        policy in arbitrary_policy(),
        start in 0..NAMES.len(),
        edges in prop::collection::vec(arbitrary_edge(), 0..30)
    ) {
        let mut machine = StateMachine::new(states, NAMES[start], policy).unwrap();

        for edge in &edges {
            let name = machine.apply(edge).name().to_string();
            prop_assert!(machine.get_state(&name).is_ok());
            prop_assert_eq!(machine.current_name(), name.as_str());
        }
    }

    #[test]
    fn stay_policy_ignores_undefined_edges(
        states in arbitrary_states(),
        start in 0..NAMES.len(),
        edge in arbitrary_edge()
    ) {
        let mut machine = StateMachine::new(states, NAMES[start], UndefinedPolicy::Stay).unwrap();
        let before = machine.current_state().clone();

        let after = machine.apply(&edge).clone();
        if before.target(&edge).is_none() {
            prop_assert_eq!(before, after);
        } else {
            prop_assert_eq!(Some(after.name()), before.target(&edge));
        }
    }

    #[test]
    fn doom_is_absorbing(
        states in arbitrary_states(),
        start in 0..NAMES.len(),
        edges in prop::collection::vec(arbitrary_edge(), 1..20)
    ) {
        let mut machine = StateMachine::new(states, NAMES[start], UndefinedPolicy::Doom).unwrap();
        machine.apply("never-defined");
        prop_assert!(machine.is_doomed());

        for edge in &edges {
            prop_assert_eq!(machine.apply(edge).name(), DOOM_STATE);
        }
    }

    #[test]
    fn doom_policy_appends_exactly_one_state(states in arbitrary_states()) {
        let count = states.len();
        let machine = StateMachine::new(states, NAMES[0], UndefinedPolicy::Doom).unwrap();
        prop_assert_eq!(machine.states().len(), count + 1);
        prop_assert_eq!(machine.states().last().map(State::name), Some(DOOM_STATE));
    }

    #[test]
    fn distinct_definitions_grow_the_table(count in 0usize..20) {
        let mut state = State::new("A");
        for i in 0..count {
            state.define_transition(format!("edge-{i}"), "B");
        }
        prop_assert_eq!(state.transitions().len(), count);
    }

    #[test]
    fn redefinition_keeps_latest_target(
        targets in prop::collection::vec(0..NAMES.len(), 1..10)
    ) {
        let mut state = State::new("A");
        for &target in &targets {
            state.define_transition("go", NAMES[target]);
        }

        prop_assert_eq!(state.transitions().len(), 1);
        let last = targets[targets.len() - 1];
        prop_assert_eq!(state.target("go"), Some(NAMES[last]));
    }

    #[test]
    fn unknown_start_never_builds(
        states in arbitrary_states(),
        policy in arbitrary_policy(),
        start in "[a-z]{1,8}"
    ) {
        let result = StateMachine::new(states, &start, policy);
        prop_assert!(result.is_err());
    }

    #[test]
    fn lookup_of_unknown_name_fails(
        states in arbitrary_states(),
        name in "[a-z]{1,8}"
    ) {
        let machine = StateMachine::new(states, NAMES[0], UndefinedPolicy::Stay).unwrap();
        prop_assert!(machine.get_state(&name).is_err());
    }
}
