//! Parsers for comma lists, transition lines and input strings.

use crate::core::{Label, Mode, StateId, Symbol, TransitionTable, EPSILON_TOKEN};
use crate::parse::error::ParseError;
use std::collections::BTreeSet;
use tracing::debug;

const ARROW: &str = "->";

/// Split a comma-separated list into trimmed, non-empty names.
///
/// ```rust
/// use fasim::parse::parse_list;
///
/// let names: Vec<String> = parse_list(" q0, q1,,q2 ").into_iter().collect();
/// assert_eq!(names, vec!["q0", "q1", "q2"]);
/// ```
pub fn parse_list(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_states(text: &str) -> BTreeSet<StateId> {
    parse_list(text).into_iter().map(StateId::from).collect()
}

pub(crate) fn parse_alphabet(text: &str) -> Result<BTreeSet<Symbol>, ParseError> {
    let names = parse_list(text);
    if names.contains(EPSILON_TOKEN) {
        return Err(ParseError::ReservedSymbol {
            context: "alphabet",
        });
    }
    Ok(names.into_iter().map(Symbol::new).collect())
}

/// Parse `state,symbol->next1,next2` lines into a transition table.
///
/// Blank lines are skipped and repeated `(state, symbol)` pairs merge. The
/// symbol `ε` marks an epsilon transition, accepted only in
/// nondeterministic mode.
///
/// ```rust
/// use fasim::core::{Mode, StateId, Symbol};
/// use fasim::parse::parse_transitions;
///
/// let table = parse_transitions("q0,a->q1\n\nq0,a->q2", Mode::Nondeterministic).unwrap();
/// assert_eq!(table.symbol_targets(&StateId::new("q0"), &Symbol::new("a")).len(), 2);
///
/// assert!(parse_transitions("q0 a -> q1", Mode::Deterministic).is_err());
/// ```
pub fn parse_transitions(text: &str, mode: Mode) -> Result<TransitionTable, ParseError> {
    let mut table = TransitionTable::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;
        let malformed = |reason| ParseError::MalformedTransitionLine {
            line_number,
            line: line.to_string(),
            reason,
        };

        let (left, right) = split_once_exactly(line, ARROW)
            .ok_or_else(|| malformed("expected exactly one '->'"))?;
        let (state, symbol) = split_once_exactly(left, ",")
            .ok_or_else(|| malformed("expected 'state,symbol' before '->'"))?;
        let (state, symbol) = (state.trim(), symbol.trim());
        if state.is_empty() || symbol.is_empty() {
            return Err(malformed("state and symbol must not be empty"));
        }

        let targets = parse_states(right);
        if targets.is_empty() {
            return Err(malformed("no target states after '->'"));
        }

        let label = if symbol == EPSILON_TOKEN {
            if mode == Mode::Deterministic {
                return Err(ParseError::EpsilonInDeterministicMode {
                    line_number,
                    line: line.to_string(),
                });
            }
            Label::Epsilon
        } else {
            Label::Symbol(Symbol::new(symbol))
        };

        table.insert(state, label, targets);
    }

    debug!(entries = table.len(), ?mode, "parsed transitions");
    Ok(table)
}

/// Split input text into symbols, one per character.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_input(text: &str) -> Result<Vec<Symbol>, ParseError> {
    let text = text.trim();
    if text.contains(EPSILON_TOKEN) {
        return Err(ParseError::ReservedSymbol { context: "input" });
    }
    Ok(text.chars().map(Symbol::from).collect())
}

fn split_once_exactly<'a>(text: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let (left, right) = text.split_once(separator)?;
    if right.contains(separator) {
        return None;
    }
    Some((left, right))
}
