//! Execution of automata over input sequences.
//!
//! The engine is a pure request/response call: definition and input in,
//! verdict and trace out. It never fails and performs no I/O beyond
//! `tracing` events.
//!
//! # Modes
//!
//! - **Deterministic**: track one state, reject at the first missing
//!   transition without reading the rest of the input
//! - **Nondeterministic**: track the epsilon-closed set of active states
//!   and always consume the whole input

mod automaton;
mod closure;

pub use automaton::{Automaton, RunOutcome};
pub use closure::{epsilon_closure, move_set};
