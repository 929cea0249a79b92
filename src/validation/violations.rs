//! Well-formedness violations.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// A way in which a definition fails strict checking.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("Start state '{state}' is not a declared state")]
    StartNotDeclared { state: StateId },

    #[error("Accept state '{state}' is not a declared state")]
    AcceptNotDeclared { state: StateId },

    #[error("Transition source '{state}' is not a declared state")]
    UndeclaredSource { state: StateId },

    #[error("Transition from '{from}' targets undeclared state '{state}'")]
    UndeclaredTarget { from: StateId, state: StateId },

    #[error("Transition from '{from}' uses symbol '{symbol}' outside the alphabet")]
    UndeclaredSymbol { from: StateId, symbol: Symbol },

    #[error("Deterministic automaton has an epsilon transition from '{from}'")]
    EpsilonInDeterministic { from: StateId },

    #[error("Deterministic transition from '{from}' on '{symbol}' has {targets} targets")]
    AmbiguousTransition {
        from: StateId,
        symbol: Symbol,
        targets: usize,
    },
}
