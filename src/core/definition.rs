//! Static description of a finite automaton.

use super::state::StateId;
use super::symbol::Symbol;
use super::table::TransitionTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Execution mode of an automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Follow exactly one state; stop at the first missing transition.
    #[default]
    Deterministic,
    /// Follow a set of states with epsilon-closure; always consume all input.
    Nondeterministic,
}

impl Mode {
    pub fn from_deterministic(deterministic: bool) -> Self {
        if deterministic {
            Self::Deterministic
        } else {
            Self::Nondeterministic
        }
    }
}

/// Immutable definition of a DFA or NFA.
///
/// No well-formedness checks are made here. Dangling transitions, a start
/// state missing from `states`, or accept states outside `states` are all
/// tolerated; see [`crate::validation`] for opt-in strict checking.
///
/// # Example
///
/// ```rust
/// use fasim::core::{AutomatonDefinition, Mode, StateId, Symbol, TransitionTable};
///
/// let mut transitions = TransitionTable::new();
/// transitions.insert("q0", Symbol::new("a"), ["q1"]);
///
/// let definition = AutomatonDefinition::new(
///     ["q0", "q1"].into_iter().map(StateId::from).collect(),
///     [Symbol::new("a")].into_iter().collect(),
///     transitions,
///     StateId::new("q0"),
///     [StateId::new("q1")].into_iter().collect(),
///     Mode::Deterministic,
/// );
///
/// assert!(definition.is_deterministic());
/// assert!(definition.is_accepting(&StateId::new("q1")));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<Symbol>,
    transitions: TransitionTable,
    start: StateId,
    accept: BTreeSet<StateId>,
    mode: Mode,
}

impl AutomatonDefinition {
    pub fn new(
        states: BTreeSet<StateId>,
        alphabet: BTreeSet<Symbol>,
        transitions: TransitionTable,
        start: StateId,
        accept: BTreeSet<StateId>,
        mode: Mode,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            start,
            accept,
            mode,
        }
    }

    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    pub fn start(&self) -> &StateId {
        &self.start
    }

    pub fn accept(&self) -> &BTreeSet<StateId> {
        &self.accept
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_deterministic(&self) -> bool {
        self.mode == Mode::Deterministic
    }

    pub fn is_accepting(&self, state: &StateId) -> bool {
        self.accept.contains(state)
    }

    /// True when at least one state in `states` is accepting.
    pub fn any_accepting<'a>(&self, states: impl IntoIterator<Item = &'a StateId>) -> bool {
        states.into_iter().any(|s| self.is_accepting(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AutomatonDefinition {
        let mut transitions = TransitionTable::new();
        transitions.insert("q0", Symbol::new("a"), ["q1"]);
        AutomatonDefinition::new(
            ["q0", "q1"].into_iter().map(StateId::from).collect(),
            [Symbol::new("a")].into_iter().collect(),
            transitions,
            StateId::new("q0"),
            [StateId::new("q1")].into_iter().collect(),
            Mode::Deterministic,
        )
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(Mode::from_deterministic(true), Mode::Deterministic);
        assert_eq!(Mode::from_deterministic(false), Mode::Nondeterministic);
        assert_eq!(Mode::default(), Mode::Deterministic);
    }

    #[test]
    fn accepting_membership() {
        let definition = sample();
        assert!(definition.is_accepting(&StateId::new("q1")));
        assert!(!definition.is_accepting(&StateId::new("q0")));
        assert!(definition.any_accepting(definition.states()));
        assert!(!definition.any_accepting([&StateId::new("q0")]));
    }

    #[test]
    fn definition_serializes_correctly() {
        let definition = sample();
        let json = serde_json::to_string(&definition).unwrap();
        let deserialized: AutomatonDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(definition, deserialized);
    }
}
