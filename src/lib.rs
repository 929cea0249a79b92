//! Fasim: a finite automaton execution engine.
//!
//! Given a deterministic or nondeterministic finite automaton and an input
//! sequence, fasim decides whether the automaton accepts the input and
//! explains the run step by step.
//!
//! # Core Concepts
//!
//! - **Definition**: Immutable description of states, alphabet, transitions,
//!   start and accept states, and mode
//! - **Engine**: Pure `run` call returning a verdict and a trace; it never fails
//! - **Trace**: Human-readable lines describing each step of a run
//! - **Parsing**: Textual contract for front ends (comma lists, `state,symbol->targets` lines)
//! - **Validation**: Opt-in strict checks that accumulate every violation
//!
//! # Example
//!
//! ```rust
//! use fasim::builder::AutomatonBuilder;
//! use fasim::Automaton;
//!
//! let definition = AutomatonBuilder::new()
//!     .states(["q0", "q1"])
//!     .alphabet(["a", "b"])
//!     .transition("q0", "a", ["q1"])
//!     .transition("q1", "b", ["q1"])
//!     .transition("q1", "a", ["q0"])
//!     .start("q0")
//!     .accept(["q1"])
//!     .build()
//!     .unwrap();
//!
//! let automaton = Automaton::new(definition);
//! let outcome = automaton.run_str("ab");
//! assert!(outcome.accepted);
//!
//! let outcome = automaton.run_str("ba");
//! assert!(!outcome.accepted);
//! assert_eq!(outcome.trace.lines()[1], "No transition from q0 on 'b'. Reject.");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod parse;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{AutomatonDefinition, Label, Mode, StateId, Symbol, Trace, TraceStep};
pub use engine::{Automaton, RunOutcome};
