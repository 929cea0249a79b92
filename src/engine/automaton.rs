//! Automaton engine that executes a definition against an input sequence.

use crate::core::{AutomatonDefinition, Mode, StateId, Symbol, Trace, TraceStep};
use crate::engine::closure::{epsilon_closure, move_set};
use crate::validation::{validate, Violation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

/// Verdict and explanation of one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub accepted: bool,
    pub trace: Trace,
}

/// Executes a finite automaton.
///
/// The engine owns an immutable definition and keeps no state between
/// runs, so one instance can be shared across threads and called
/// concurrently.
///
/// In deterministic mode a `(state, symbol)` pair with several targets
/// moves to the lexicographically smallest target name.
#[derive(Clone, Debug)]
pub struct Automaton {
    definition: AutomatonDefinition,
}

impl Automaton {
    /// Wrap a definition without checking it.
    pub fn new(definition: AutomatonDefinition) -> Self {
        Self { definition }
    }

    /// Wrap a definition only if it passes every strict check.
    ///
    /// Returns all violations found, not just the first.
    pub fn validated(definition: AutomatonDefinition) -> Result<Self, NonEmptyVec<Violation>> {
        match validate(&definition) {
            Validation::Success(()) => Ok(Self::new(definition)),
            Validation::Failure(violations) => Err(violations),
        }
    }

    pub fn definition(&self) -> &AutomatonDefinition {
        &self.definition
    }

    /// Run the automaton over `input`.
    ///
    /// Never fails: a missing transition or an unreached accept state is a
    /// rejection recorded in the trace.
    pub fn run(&self, input: &[Symbol]) -> RunOutcome {
        debug!(
            mode = ?self.definition.mode(),
            start = %self.definition.start(),
            input_len = input.len(),
            "starting run"
        );
        let outcome = match self.definition.mode() {
            Mode::Deterministic => self.run_deterministic(input),
            Mode::Nondeterministic => self.run_nondeterministic(input),
        };
        debug!(accepted = outcome.accepted, steps = outcome.trace.len(), "run finished");
        outcome
    }

    /// Run over a string, one symbol per character.
    pub fn run_str(&self, input: &str) -> RunOutcome {
        let symbols: Vec<Symbol> = input.chars().map(Symbol::from).collect();
        self.run(&symbols)
    }

    /// Verdict of [`run`](Self::run) without the trace.
    pub fn accepts(&self, input: &[Symbol]) -> bool {
        self.run(input).accepted
    }

    /// Epsilon-closure of `states` under this automaton's transitions.
    pub fn epsilon_closure(&self, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
        epsilon_closure(self.definition.transitions(), states)
    }

    fn run_deterministic(&self, input: &[Symbol]) -> RunOutcome {
        let table = self.definition.transitions();
        let mut trace = Trace::new();
        let mut current = self.definition.start().clone();
        trace.push(TraceStep::Start {
            state: current.clone(),
        });

        for symbol in input {
            // BTreeSet iterates in ascending order: first is the smallest name.
            let Some(next) = table.symbol_targets(&current, symbol).first() else {
                trace!(from = %current, %symbol, "no transition");
                trace.push(TraceStep::NoTransition {
                    from: current,
                    symbol: symbol.clone(),
                });
                return RunOutcome {
                    accepted: false,
                    trace,
                };
            };

            trace!(from = %current, %symbol, to = %next, "moved");
            current = next.clone();
            trace.push(TraceStep::Moved {
                symbol: symbol.clone(),
                to: current.clone(),
            });
        }

        let accepted = self.definition.is_accepting(&current);
        trace.push(TraceStep::Finished {
            state: current,
            accepted,
        });
        RunOutcome { accepted, trace }
    }

    fn run_nondeterministic(&self, input: &[Symbol]) -> RunOutcome {
        let table = self.definition.transitions();
        let start = self.definition.start().clone();
        let mut trace = Trace::new();

        let mut current = epsilon_closure(table, &BTreeSet::from([start.clone()]));
        trace.push(TraceStep::StartClosure {
            start,
            states: current.clone(),
        });

        for symbol in input {
            current = epsilon_closure(table, &move_set(table, &current, symbol));
            trace!(%symbol, active = current.len(), "stepped");
            trace.push(TraceStep::Stepped {
                symbol: symbol.clone(),
                states: current.clone(),
            });
        }

        let accepted = self.definition.any_accepting(&current);
        trace.push(TraceStep::FinishedSet {
            states: current,
            accepted,
        });
        RunOutcome { accepted, trace }
    }
}
