//! The transition relation.

use super::state::StateId;
use super::symbol::{Label, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

static NO_TARGETS: BTreeSet<StateId> = BTreeSet::new();

/// One serialized row of a [`TransitionTable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEntry {
    pub from: StateId,
    pub label: Label,
    pub to: BTreeSet<StateId>,
}

/// Mapping from `(state, label)` to the set of target states.
///
/// A missing key and a key mapped to an empty set mean the same thing: no
/// move is possible. [`targets`](Self::targets) hides the difference by
/// returning an empty set for absent keys.
///
/// # Example
///
/// ```rust
/// use fasim::core::{Label, StateId, Symbol, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.insert("q0", Symbol::new("a"), ["q1"]);
/// table.insert("q0", Symbol::new("a"), ["q2"]);
///
/// let targets = table.targets(&StateId::new("q0"), &Label::from(Symbol::new("a")));
/// assert_eq!(targets.len(), 2);
/// assert!(table.targets(&StateId::new("q1"), &Label::Epsilon).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TransitionEntry>", into = "Vec<TransitionEntry>")]
pub struct TransitionTable {
    entries: BTreeMap<(StateId, Label), BTreeSet<StateId>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add targets for `(from, label)`, merging with any already present.
    pub fn insert<I, T>(&mut self, from: impl Into<StateId>, label: impl Into<Label>, targets: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        self.entries
            .entry((from.into(), label.into()))
            .or_default()
            .extend(targets.into_iter().map(Into::into));
    }

    /// Targets reachable from `state` on `label`; empty when none are defined.
    pub fn targets(&self, state: &StateId, label: &Label) -> &BTreeSet<StateId> {
        // BTreeMap keyed by a tuple needs an owned key for lookup.
        self.entries
            .get(&(state.clone(), label.clone()))
            .unwrap_or(&NO_TARGETS)
    }

    /// Targets reachable from `state` on an ordinary input symbol.
    pub fn symbol_targets(&self, state: &StateId, symbol: &Symbol) -> &BTreeSet<StateId> {
        self.targets(state, &Label::Symbol(symbol.clone()))
    }

    /// Targets reachable from `state` through a single epsilon move.
    pub fn epsilon_targets(&self, state: &StateId) -> &BTreeSet<StateId> {
        self.targets(state, &Label::Epsilon)
    }

    /// Iterate all defined entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &Label, &BTreeSet<StateId>)> {
        self.entries
            .iter()
            .map(|((from, label), to)| (from, label, to))
    }

    /// Number of `(state, label)` keys, including keys with no targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<TransitionEntry>> for TransitionTable {
    fn from(rows: Vec<TransitionEntry>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row.from, row.label, row.to);
        }
        table
    }
}

impl From<TransitionTable> for Vec<TransitionEntry> {
    fn from(table: TransitionTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|((from, label), to)| TransitionEntry { from, label, to })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Label {
        Label::Symbol(Symbol::new(name))
    }

    #[test]
    fn absent_key_yields_empty_targets() {
        let table = TransitionTable::new();
        assert!(table.targets(&StateId::new("q0"), &sym("a")).is_empty());
        assert!(table.epsilon_targets(&StateId::new("q0")).is_empty());
    }

    #[test]
    fn explicit_empty_set_behaves_like_absent_key() {
        let mut table = TransitionTable::new();
        table.insert("q0", sym("a"), Vec::<StateId>::new());

        assert_eq!(table.len(), 1);
        assert!(table.targets(&StateId::new("q0"), &sym("a")).is_empty());
    }

    #[test]
    fn repeated_insert_merges_targets() {
        let mut table = TransitionTable::new();
        table.insert("q0", sym("a"), ["q1"]);
        table.insert("q0", sym("a"), ["q2", "q1"]);

        let targets: Vec<&str> = table
            .symbol_targets(&StateId::new("q0"), &Symbol::new("a"))
            .iter()
            .map(StateId::name)
            .collect();
        assert_eq!(targets, vec!["q1", "q2"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn epsilon_and_symbol_keys_are_distinct() {
        let mut table = TransitionTable::new();
        table.insert("s0", Label::Epsilon, ["s1"]);
        table.insert("s0", sym("a"), ["s2"]);

        assert!(table.epsilon_targets(&StateId::new("s0")).contains("s1"));
        assert!(!table.epsilon_targets(&StateId::new("s0")).contains("s2"));
    }

    #[test]
    fn table_roundtrips_through_json_entries() {
        let mut table = TransitionTable::new();
        table.insert("s0", Label::Epsilon, ["s1"]);
        table.insert("s1", sym("a"), ["s2", "s0"]);

        let json = serde_json::to_string(&table).unwrap();
        let deserialized: TransitionTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }

    #[test]
    fn iter_visits_every_entry() {
        let mut table = TransitionTable::new();
        table.insert("q0", sym("a"), ["q1"]);
        table.insert("q1", sym("b"), ["q1"]);

        let froms: Vec<&str> = table.iter().map(|(from, _, _)| from.name()).collect();
        assert_eq!(froms, vec!["q0", "q1"]);
    }
}
