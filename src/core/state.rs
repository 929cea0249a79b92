//! State identifiers.
//!
//! States are opaque names. They carry no structure and are compared only
//! for equality and set membership.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of an automaton state.
///
/// Ordering is lexicographic on the name. The engine relies on this order
/// when a deterministic automaton lists several targets for one
/// `(state, symbol)` pair: the smallest identifier wins.
///
/// # Example
///
/// ```rust
/// use fasim::core::StateId;
///
/// let q0 = StateId::new("q0");
/// assert_eq!(q0.name(), "q0");
/// assert!(StateId::new("a") < StateId::new("b"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state identifier from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(StateId::new("q0").name(), "q0");
        assert_eq!(StateId::from("accept").name(), "accept");
        assert_eq!(StateId::from(String::from("s1")).name(), "s1");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let set: BTreeSet<StateId> = ["q2", "q10", "q1"].into_iter().map(StateId::from).collect();
        let names: Vec<&str> = set.iter().map(StateId::name).collect();
        assert_eq!(names, vec!["q1", "q10", "q2"]);
    }

    #[test]
    fn set_lookup_by_str() {
        let set: BTreeSet<StateId> = ["q0", "q1"].into_iter().map(StateId::from).collect();
        assert!(set.contains("q0"));
        assert!(!set.contains("q9"));
    }

    #[test]
    fn state_serializes_as_plain_string() {
        let state = StateId::new("q0");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"q0\"");
        let deserialized: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_displays_its_name() {
        assert_eq!(StateId::new("s2").to_string(), "s2");
    }
}
