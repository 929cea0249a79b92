//! Build errors for automaton definitions.

use thiserror::Error;

/// Errors that can occur when building an automaton definition.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,
}
