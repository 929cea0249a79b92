//! Builder API for ergonomic automaton construction.
//!
//! The builder collects states, symbols and transitions with a fluent API
//! and produces an immutable [`AutomatonDefinition`](crate::core::AutomatonDefinition).
//! It performs no well-formedness checks beyond requiring a start state.

pub mod automaton;
pub mod error;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
