//! Builder for constructing automaton definitions.

use crate::builder::error::BuildError;
use crate::core::{AutomatonDefinition, Label, Mode, StateId, Symbol, TransitionTable};
use std::collections::BTreeSet;

/// Builder for constructing automaton definitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use fasim::builder::AutomatonBuilder;
/// use fasim::Automaton;
///
/// let definition = AutomatonBuilder::new()
///     .states(["s0", "s1", "s2"])
///     .alphabet(["a"])
///     .epsilon("s0", ["s1"])
///     .transition("s1", "a", ["s2"])
///     .start("s0")
///     .accept(["s2"])
///     .nondeterministic()
///     .build()
///     .unwrap();
///
/// assert!(Automaton::new(definition).run_str("a").accepted);
/// ```
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<Symbol>,
    transitions: TransitionTable,
    start: Option<StateId>,
    accept: BTreeSet<StateId>,
    mode: Mode,
}

impl AutomatonBuilder {
    /// Create a new builder for a deterministic automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare states.
    pub fn states<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare alphabet symbols.
    pub fn alphabet<I, T>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Symbol>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Add a transition on `symbol`, merging with earlier ones for the same pair.
    pub fn transition<I, T>(
        mut self,
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        targets: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        self.transitions
            .insert(from, Label::Symbol(symbol.into()), targets);
        self
    }

    /// Add an epsilon transition.
    pub fn epsilon<I, T>(mut self, from: impl Into<StateId>, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        self.transitions.insert(from, Label::Epsilon, targets);
        self
    }

    /// Replace the transition table wholesale.
    pub fn transitions(mut self, transitions: TransitionTable) -> Self {
        self.transitions = transitions;
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Declare accepting states.
    pub fn accept<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        self.accept.extend(states.into_iter().map(Into::into));
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn nondeterministic(self) -> Self {
        self.mode(Mode::Nondeterministic)
    }

    /// Build the definition.
    /// Returns an error if no start state was given.
    pub fn build(self) -> Result<AutomatonDefinition, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        Ok(AutomatonDefinition::new(
            self.states,
            self.alphabet,
            self.transitions,
            start,
            self.accept,
            self.mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_start_state() {
        let result = AutomatonBuilder::new().states(["q0"]).build();
        assert_eq!(result, Err(BuildError::MissingStartState));
    }

    #[test]
    fn builder_defaults_to_deterministic() {
        let definition = AutomatonBuilder::new().start("q0").build().unwrap();
        assert!(definition.is_deterministic());
        assert!(definition.states().is_empty());
        assert!(definition.accept().is_empty());
        assert!(definition.transitions().is_empty());
    }

    #[test]
    fn fluent_api_builds_definition() {
        let definition = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet(["a", "b"])
            .transition("q0", "a", ["q1"])
            .transition("q0", "a", ["q0"])
            .epsilon("q1", ["q0"])
            .start("q0")
            .accept(["q1"])
            .nondeterministic()
            .build()
            .unwrap();

        assert_eq!(definition.mode(), Mode::Nondeterministic);
        assert_eq!(definition.start(), &StateId::new("q0"));
        assert_eq!(definition.alphabet().len(), 2);
        assert_eq!(
            definition
                .transitions()
                .symbol_targets(&StateId::new("q0"), &Symbol::new("a"))
                .len(),
            2
        );
        assert!(definition
            .transitions()
            .epsilon_targets(&StateId::new("q1"))
            .contains("q0"));
    }

    #[test]
    fn transitions_replaces_table() {
        let mut table = TransitionTable::new();
        table.insert("x", Label::Epsilon, ["y"]);

        let definition = AutomatonBuilder::new()
            .transition("q0", "a", ["q1"])
            .transitions(table.clone())
            .start("x")
            .build()
            .unwrap();

        assert_eq!(definition.transitions(), &table);
    }
}
