//! Opt-in strict checking of automaton definitions.
//!
//! The engine itself tolerates malformed definitions. This module is for
//! callers who want to hear about them up front. It uses Stillwater's
//! `Validation` type to report every violation in one pass instead of
//! stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use fasim::builder::AutomatonBuilder;
//! use fasim::validation::validate;
//!
//! let definition = AutomatonBuilder::new()
//!     .states(["q0"])
//!     .alphabet(["a"])
//!     .transition("q0", "a", ["q1", "q2"])
//!     .start("q9")
//!     .build()
//!     .unwrap();
//!
//! // Missing start, two undeclared targets, one ambiguous pair.
//! assert!(validate(&definition).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate;
pub use violations::Violation;
