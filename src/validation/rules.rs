//! Strict well-formedness rules using Validation.

use crate::core::{AutomatonDefinition, Label};
use crate::validation::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<Violation>>;

fn check(ok: bool, violation: impl FnOnce() -> Violation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check a definition against every strict rule, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the definition is well formed.
/// Returns `Validation::Failure` with every violation otherwise.
pub fn validate(definition: &AutomatonDefinition) -> Check {
    let states = definition.states();
    let mut checks: Vec<Check> = Vec::new();

    let start = definition.start();
    checks.push(check(states.contains(start), || {
        Violation::StartNotDeclared {
            state: start.clone(),
        }
    }));

    for state in definition.accept() {
        checks.push(check(states.contains(state), || {
            Violation::AcceptNotDeclared {
                state: state.clone(),
            }
        }));
    }

    for (from, label, targets) in definition.transitions().iter() {
        checks.push(check(states.contains(from), || {
            Violation::UndeclaredSource { state: from.clone() }
        }));

        for target in targets {
            checks.push(check(states.contains(target), || {
                Violation::UndeclaredTarget {
                    from: from.clone(),
                    state: target.clone(),
                }
            }));
        }

        match label {
            Label::Symbol(symbol) => {
                checks.push(check(definition.alphabet().contains(symbol), || {
                    Violation::UndeclaredSymbol {
                        from: from.clone(),
                        symbol: symbol.clone(),
                    }
                }));
                if definition.is_deterministic() {
                    checks.push(check(targets.len() <= 1, || {
                        Violation::AmbiguousTransition {
                            from: from.clone(),
                            symbol: symbol.clone(),
                            targets: targets.len(),
                        }
                    }));
                }
            }
            Label::Epsilon => {
                checks.push(check(!definition.is_deterministic(), || {
                    Violation::EpsilonInDeterministic { from: from.clone() }
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
