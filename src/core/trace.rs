//! Step-by-step explanation of a run.
//!
//! A trace is for people reading it, not for control flow. Each step knows
//! how to render itself as one line of text.

use super::state::StateId;
use super::symbol::{Symbol, EPSILON_TOKEN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One recorded event of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraceStep {
    /// Deterministic run began in `state`.
    Start { state: StateId },
    /// Nondeterministic run began in the epsilon-closure of `start`.
    StartClosure {
        start: StateId,
        states: BTreeSet<StateId>,
    },
    /// Deterministic step consumed `symbol` and moved to `to`.
    Moved { symbol: Symbol, to: StateId },
    /// Deterministic step found nothing for `symbol`; the run rejects here.
    NoTransition { from: StateId, symbol: Symbol },
    /// Nondeterministic step consumed `symbol`, leaving `states` active.
    Stepped {
        symbol: Symbol,
        states: BTreeSet<StateId>,
    },
    /// Deterministic run consumed all input and stopped in `state`.
    Finished { state: StateId, accepted: bool },
    /// Nondeterministic run consumed all input with `states` active.
    FinishedSet {
        states: BTreeSet<StateId>,
        accepted: bool,
    },
}

struct SetDisplay<'a>(&'a BTreeSet<StateId>);

impl fmt::Display for SetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, state) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{state}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { state } => write!(f, "Start at: {state}"),
            Self::StartClosure { start, states } => write!(
                f,
                "Start at {EPSILON_TOKEN}-closure({start}) = {}",
                SetDisplay(states)
            ),
            Self::Moved { symbol, to } => write!(f, "On '{symbol}' -> {to}"),
            Self::NoTransition { from, symbol } => {
                write!(f, "No transition from {from} on '{symbol}'. Reject.")
            }
            Self::Stepped { symbol, states } => {
                write!(f, "On '{symbol}' -> {}", SetDisplay(states))
            }
            Self::Finished { state, accepted } => {
                write!(f, "End at: {state}. Accepted: {accepted}")
            }
            Self::FinishedSet { states, accepted } => {
                write!(f, "End states: {}. Accepted: {accepted}", SetDisplay(states))
            }
        }
    }
}

/// Ordered record of every step taken during one run.
///
/// # Example
///
/// ```rust
/// use fasim::core::StateId;
/// use fasim::Automaton;
/// use fasim::builder::AutomatonBuilder;
///
/// let definition = AutomatonBuilder::new()
///     .states(["q0", "q1"])
///     .alphabet(["a"])
///     .transition("q0", "a", ["q1"])
///     .start("q0")
///     .accept(["q1"])
///     .build()
///     .unwrap();
///
/// let outcome = Automaton::new(definition).run_str("a");
/// assert_eq!(outcome.trace.lines(), vec![
///     "Start at: q0".to_string(),
///     "On 'a' -> q1".to_string(),
///     "End at: q1. Accepted: true".to_string(),
/// ]);
/// assert_eq!(outcome.trace.path(), vec![&StateId::new("q0"), &StateId::new("q1")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Render every step as one line of text.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// States visited by a deterministic run, in order.
    ///
    /// Empty for nondeterministic traces, which track sets instead.
    pub fn path(&self) -> Vec<&StateId> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                TraceStep::Start { state } => Some(state),
                TraceStep::Moved { to, .. } => Some(to),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
