//! Core automaton types.
//!
//! This module contains the pure data model of the engine:
//! - State identifiers and input symbols
//! - The transition relation, keyed by `(state, label)`
//! - The immutable automaton definition
//! - The step trace produced by a run
//!
//! Nothing in this module performs I/O or mutates shared state.

mod definition;
mod state;
mod symbol;
mod table;
mod trace;

pub use definition::{AutomatonDefinition, Mode};
pub use state::StateId;
pub use symbol::{Label, Symbol, EPSILON_TOKEN};
pub use table::{TransitionEntry, TransitionTable};
pub use trace::{Trace, TraceStep};
