//! Text front-end contract.
//!
//! Turns the textual fields a user types (comma lists, transition lines,
//! an input string) into the engine's data model. Every error here is
//! reported before the engine runs.
//!
//! # Transition syntax
//!
//! One transition per line:
//!
//! ```text
//! q0,a->q1
//! q1,b->q1,q2
//! s0,ε->s1
//! ```

pub mod error;
pub mod form;
pub mod text;

pub use error::ParseError;
pub use form::AutomatonForm;
pub use text::{parse_input, parse_list, parse_transitions};
