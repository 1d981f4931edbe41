//! Structural checks run over a table before it is accepted.

use crate::core::{StateDescriptor, StateId};
use crate::validation::violations::TableViolation;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check.
pub type Check = Validation<(), NonEmptyVec<TableViolation>>;

type Index<'a> = HashMap<StateId, &'a StateDescriptor>;

/// Run every structural check over `states`, accumulating ALL violations.
///
/// Returns `Validation::Success(())` for a well-formed table. A failure
/// carries every defect, not only the first one.
pub fn validate_table(states: &[StateDescriptor]) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut index: Index<'_> = HashMap::with_capacity(states.len());

    for state in states {
        if state.id().is_none() {
            checks.push(Validation::fail(TableViolation::NoneId));
        } else if index.insert(state.id(), state).is_some() {
            checks.push(Validation::fail(TableViolation::DuplicateState { id: state.id() }));
        }
    }

    for state in states.iter().filter(|s| !s.id().is_none()) {
        checks.push(check_parent(state, &index));
        checks.push(check_default_child(state, &index));
        checks.extend(check_targets(state, &index));
        checks.push(check_parent_chain(state, &index));
        checks.push(check_descent(state, &index));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_parent(state: &StateDescriptor, index: &Index<'_>) -> Check {
    match state.parent() {
        Some(parent) if !index.contains_key(&parent) => {
            Validation::fail(TableViolation::UnknownParent {
                state: state.id(),
                parent,
            })
        }
        _ => Validation::success(()),
    }
}

fn check_default_child(state: &StateDescriptor, index: &Index<'_>) -> Check {
    if state.is_leaf() {
        return Validation::success(());
    }

    let child = state.default_child();
    if !index.contains_key(&child) {
        return Validation::fail(TableViolation::UnknownDefaultChild {
            state: state.id(),
            child,
        });
    }

    if is_descendant(child, state.id(), index) {
        Validation::success(())
    } else {
        Validation::fail(TableViolation::DefaultChildNotDescendant {
            state: state.id(),
            child,
        })
    }
}

fn check_targets(state: &StateDescriptor, index: &Index<'_>) -> Vec<Check> {
    state
        .transitions()
        .iter()
        .filter(|t| !t.is_internal() && !index.contains_key(&t.target))
        .map(|t| {
            Validation::fail(TableViolation::UnknownTarget {
                state: state.id(),
                event: t.event,
                target: t.target,
            })
        })
        .collect()
}

fn check_parent_chain(state: &StateDescriptor, index: &Index<'_>) -> Check {
    let mut probe = state.parent();
    for _ in 0..index.len() {
        match probe.and_then(|id| index.get(&id)) {
            Some(parent) => probe = parent.parent(),
            // Reached a root or an unknown parent (reported elsewhere).
            None => return Validation::success(()),
        }
    }
    Validation::fail(TableViolation::ParentCycle { state: state.id() })
}

fn check_descent(state: &StateDescriptor, index: &Index<'_>) -> Check {
    let mut candidate = state;
    for _ in 0..=index.len() {
        if candidate.is_leaf() {
            return Validation::success(());
        }
        match index.get(&candidate.default_child()) {
            Some(next) => candidate = next,
            // Unknown child is its own violation.
            None => return Validation::success(()),
        }
    }
    Validation::fail(TableViolation::DescentCycle { state: state.id() })
}

/// Whether `ancestor` appears on the parent chain of `id`.
fn is_descendant(id: StateId, ancestor: StateId, index: &Index<'_>) -> bool {
    let mut probe = index.get(&id).and_then(|s| s.parent());
    for _ in 0..index.len() {
        match probe {
            Some(parent) if parent == ancestor => return true,
            Some(parent) => probe = index.get(&parent).and_then(|s| s.parent()),
            None => return false,
        }
    }
    false
}
