//! Table violations and the error that carries them.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// A single defect found in a state table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("State id 0 is reserved for the none sentinel")]
    NoneId,

    #[error("State {id} is declared more than once")]
    DuplicateState { id: StateId },

    #[error("State {state} names unknown parent {parent}")]
    UnknownParent { state: StateId, parent: StateId },

    #[error("State {state} names unknown default child {child}")]
    UnknownDefaultChild { state: StateId, child: StateId },

    #[error("State {state} routes event {event} to unknown target {target}")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },

    #[error("Parent chain of state {state} contains a cycle")]
    ParentCycle { state: StateId },

    #[error("Default child {child} of state {state} is not one of its descendants")]
    DefaultChildNotDescendant { state: StateId, child: StateId },

    #[error("Default-child descent from state {state} never reaches a leaf")]
    DescentCycle { state: StateId },
}

/// Every violation found while building a table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid state table ({} violation(s)): {}", .violations.len(), join(.violations))]
pub struct TableError {
    violations: Vec<TableViolation>,
}

impl TableError {
    pub fn new(violations: Vec<TableViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[TableViolation] {
        &self.violations
    }
}

fn join(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
