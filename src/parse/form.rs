//! The five text fields plus mode that describe an automaton.

use crate::core::{AutomatonDefinition, Mode, StateId};
use crate::parse::error::ParseError;
use crate::parse::text::{parse_alphabet, parse_states, parse_transitions};
use serde::{Deserialize, Serialize};

fn default_deterministic() -> bool {
    true
}

/// Raw textual description of an automaton, as a front end collects it.
///
/// Deserializable so a front end can read it from a JSON file.
///
/// # Example
///
/// ```rust
/// use fasim::parse::AutomatonForm;
/// use fasim::Automaton;
///
/// let form: AutomatonForm = serde_json::from_str(r#"{
///     "states": "q0, q1",
///     "alphabet": "a, b",
///     "start": "q0",
///     "accept": "q1",
///     "transitions": "q0,a->q1\nq1,b->q1\nq1,a->q0"
/// }"#).unwrap();
///
/// let automaton = Automaton::new(form.into_definition().unwrap());
/// assert!(automaton.run_str("ab").accepted);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomatonForm {
    #[serde(default)]
    pub states: String,
    #[serde(default)]
    pub alphabet: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub accept: String,
    #[serde(default)]
    pub transitions: String,
    #[serde(default = "default_deterministic")]
    pub deterministic: bool,
}

impl AutomatonForm {
    pub fn mode(&self) -> Mode {
        Mode::from_deterministic(self.deterministic)
    }

    /// Parse every field into a definition.
    ///
    /// A blank start state is an error; blank states, alphabet and accept
    /// fields become empty sets.
    pub fn into_definition(self) -> Result<AutomatonDefinition, ParseError> {
        let mode = self.mode();
        let start = self.start.trim();
        if start.is_empty() {
            return Err(ParseError::EmptyOrMissingField { field: "start" });
        }

        let alphabet = parse_alphabet(&self.alphabet)?;
        let transitions = parse_transitions(&self.transitions, mode)?;

        Ok(AutomatonDefinition::new(
            parse_states(&self.states),
            alphabet,
            transitions,
            StateId::new(start),
            parse_states(&self.accept),
            mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn form() -> AutomatonForm {
        AutomatonForm {
            states: "s0,s1,s2".to_string(),
            alphabet: "a".to_string(),
            start: " s0 ".to_string(),
            accept: "s2".to_string(),
            transitions: "s0,ε->s1\ns1,a->s2".to_string(),
            deterministic: false,
        }
    }

    #[test]
    fn form_builds_definition() {
        let definition = form().into_definition().unwrap();

        assert_eq!(definition.mode(), Mode::Nondeterministic);
        assert_eq!(definition.start(), &StateId::new("s0"));
        assert_eq!(definition.states().len(), 3);
        assert!(definition.alphabet().contains(&Symbol::new("a")));
        assert!(definition.is_accepting(&StateId::new("s2")));
        assert_eq!(definition.transitions().len(), 2);
    }

    #[test]
    fn blank_start_is_rejected() {
        let form = AutomatonForm {
            start: "   ".to_string(),
            ..form()
        };
        assert_eq!(
            form.into_definition(),
            Err(ParseError::EmptyOrMissingField { field: "start" })
        );
    }

    #[test]
    fn blank_sets_are_tolerated() {
        let form = AutomatonForm {
            start: "q0".to_string(),
            ..AutomatonForm::default()
        };
        let definition = form.into_definition().unwrap();
        assert!(definition.states().is_empty());
        assert!(definition.alphabet().is_empty());
        assert!(definition.accept().is_empty());
    }

    #[test]
    fn malformed_transition_aborts_whole_form() {
        let form = AutomatonForm {
            transitions: "s0,ε->s1\nbroken".to_string(),
            ..form()
        };
        assert!(matches!(
            form.into_definition(),
            Err(ParseError::MalformedTransitionLine { line_number: 2, .. })
        ));
    }

    #[test]
    fn epsilon_rejected_when_form_is_deterministic() {
        let form = AutomatonForm {
            deterministic: true,
            ..form()
        };
        assert!(matches!(
            form.into_definition(),
            Err(ParseError::EpsilonInDeterministicMode { .. })
        ));
    }

    #[test]
    fn json_defaults_to_deterministic() {
        let form: AutomatonForm = serde_json::from_str(r#"{"start": "q0"}"#).unwrap();
        assert!(form.deterministic);
        assert_eq!(form.mode(), Mode::Deterministic);
    }
}
