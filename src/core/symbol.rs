//! Input symbols and transition labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual token standing for the epsilon transition.
pub const EPSILON_TOKEN: &str = "ε";

/// An atomic input token drawn from an automaton's alphabet.
///
/// Usually a single character, but any name works.
///
/// # Example
///
/// ```rust
/// use fasim::core::Symbol;
///
/// let a = Symbol::new("a");
/// assert_eq!(a.name(), "a");
/// assert_eq!(Symbol::from('b'), Symbol::new("b"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

/// Label on a transition: either a real symbol or epsilon.
///
/// Epsilon is its own variant, so it can never collide with a member of
/// the alphabet or appear in an input sequence.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Symbol(Symbol),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// The symbol carried by this label, `None` for epsilon.
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Epsilon => None,
        }
    }
}

impl From<Symbol> for Label {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => symbol.fmt(f),
            Self::Epsilon => f.write_str(EPSILON_TOKEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_from_char_uses_single_character_name() {
        assert_eq!(Symbol::from('x').name(), "x");
    }

    #[test]
    fn epsilon_displays_reserved_token() {
        assert_eq!(Label::Epsilon.to_string(), EPSILON_TOKEN);
        assert_eq!(Label::from(Symbol::new("a")).to_string(), "a");
    }

    #[test]
    fn epsilon_never_equals_a_symbol_label() {
        let lookalike = Label::Symbol(Symbol::new(EPSILON_TOKEN));
        assert_ne!(lookalike, Label::Epsilon);
        assert!(!lookalike.is_epsilon());
        assert!(Label::Epsilon.is_epsilon());
    }

    #[test]
    fn symbol_accessor() {
        assert_eq!(Label::Epsilon.symbol(), None);
        assert_eq!(
            Label::Symbol(Symbol::new("b")).symbol(),
            Some(&Symbol::new("b"))
        );
    }

    #[test]
    fn label_serializes_with_tag() {
        let json = serde_json::to_string(&Label::Symbol(Symbol::new("a"))).unwrap();
        assert_eq!(json, r#"{"symbol":"a"}"#);
        let json = serde_json::to_string(&Label::Epsilon).unwrap();
        assert_eq!(json, r#""epsilon""#);
    }
}
