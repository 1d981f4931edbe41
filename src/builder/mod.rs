//! Builder API for ergonomic table construction.
//!
//! This module provides fluent builders and macros for assembling a state
//! table in code, with validation when the table is built.

pub mod error;
pub mod macros;
pub mod state;
pub mod table;

pub use error::BuildError;
pub use state::StateBuilder;
pub use table::TableBuilder;

use crate::core::{EventId, StateDescriptor, StateId, Transition};

/// Create a leaf state with no action.
///
/// # Example
///
/// ```
/// use hsm_dispatch::builder::leaf;
/// use hsm_dispatch::core::{EventId, StateId};
///
/// let led_on = leaf(StateId::new(5), StateId::new(3), &[(EventId::new(5), StateId::new(6))]);
/// assert!(led_on.is_leaf());
/// ```
pub fn leaf(id: StateId, parent: StateId, rules: &[(EventId, StateId)]) -> StateDescriptor {
    StateDescriptor::new(id, id, parent, to_transitions(rules), None)
}

/// Create a composite state entered through `initial`, with no action.
///
/// # Example
///
/// ```
/// use hsm_dispatch::builder::composite;
/// use hsm_dispatch::core::StateId;
///
/// let run = composite(StateId::new(3), StateId::NONE, StateId::new(5), &[]);
/// assert_eq!(run.default_child(), StateId::new(5));
/// ```
pub fn composite(
    id: StateId,
    parent: StateId,
    initial: StateId,
    rules: &[(EventId, StateId)],
) -> StateDescriptor {
    StateDescriptor::new(id, initial, parent, to_transitions(rules), None)
}

fn to_transitions(rules: &[(EventId, StateId)]) -> Vec<Transition> {
    rules
        .iter()
        .map(|&(event, target)| Transition::new(event, target))
        .collect()
}
