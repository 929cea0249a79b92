//! Errors raised while turning text into an automaton.

use thiserror::Error;

/// Errors that can occur when parsing textual automaton input.
///
/// Any of these aborts the whole parse; no partial automaton is built.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid transition format on line {line_number} ({reason}): {line}")]
    MalformedTransitionLine {
        line_number: usize,
        line: String,
        reason: &'static str,
    },

    #[error("Epsilon transition on line {line_number} is only allowed in nondeterministic mode: {line}")]
    EpsilonInDeterministicMode { line_number: usize, line: String },

    #[error("Required field '{field}' is empty")]
    EmptyOrMissingField { field: &'static str },

    #[error("Reserved epsilon token cannot be used in the {context}")]
    ReservedSymbol { context: &'static str },
}
