//! Set operations used by nondeterministic runs.

use crate::core::{StateId, Symbol, TransitionTable};
use std::collections::BTreeSet;

/// Smallest superset of `states` closed under epsilon moves.
///
/// Uses a worklist, so each state is expanded at most once and epsilon
/// cycles terminate.
///
/// # Example
///
/// ```rust
/// use fasim::core::{Label, StateId, TransitionTable};
/// use fasim::engine::epsilon_closure;
/// use std::collections::BTreeSet;
///
/// let mut table = TransitionTable::new();
/// table.insert("s0", Label::Epsilon, ["s1"]);
/// table.insert("s1", Label::Epsilon, ["s0"]);
///
/// let start: BTreeSet<StateId> = [StateId::new("s0")].into_iter().collect();
/// let closure = epsilon_closure(&table, &start);
/// assert_eq!(closure.len(), 2);
/// ```
pub fn epsilon_closure(table: &TransitionTable, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
    let mut closure = states.clone();
    let mut stack: Vec<StateId> = states.iter().cloned().collect();

    while let Some(state) = stack.pop() {
        for next in table.epsilon_targets(&state) {
            if closure.insert(next.clone()) {
                stack.push(next.clone());
            }
        }
    }

    closure
}

/// Union of the targets of every state in `states` on `symbol`.
pub fn move_set(
    table: &TransitionTable,
    states: &BTreeSet<StateId>,
    symbol: &Symbol,
) -> BTreeSet<StateId> {
    states
        .iter()
        .flat_map(|state| table.symbol_targets(state, symbol))
        .cloned()
        .collect()
}
