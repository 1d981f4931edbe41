//! Builder for constructing state descriptors.

use crate::builder::error::BuildError;
use crate::core::{Action, ActionContext, EventId, StateDescriptor, StateId, Transition};
use std::sync::Arc;

/// Builder for constructing a state descriptor with a fluent API.
///
/// Without `.parent()` the state is root-level; without `.initial()` it is a
/// leaf.
pub struct StateBuilder {
    id: Option<StateId>,
    parent: StateId,
    initial: Option<StateId>,
    transitions: Vec<Transition>,
    action: Option<Action>,
}

impl StateBuilder {
    /// Create a new state builder.
    pub fn new() -> Self {
        Self {
            id: None,
            parent: StateId::NONE,
            initial: None,
            transitions: Vec::new(),
            action: None,
        }
    }

    /// Set the state id (required).
    pub fn id(mut self, id: StateId) -> Self {
        self.id = Some(id);
        self
    }

    /// Nest this state inside `parent`.
    pub fn parent(mut self, parent: StateId) -> Self {
        self.parent = parent;
        self
    }

    /// Make this a composite entered through `child`.
    pub fn initial(mut self, child: StateId) -> Self {
        self.initial = Some(child);
        self
    }

    /// Add a rule. Rules are matched in the order they are added.
    pub fn on(mut self, event: EventId, target: StateId) -> Self {
        self.transitions.push(Transition::new(event, target));
        self
    }

    /// Add a rule that runs the action without changing state.
    pub fn internal(self, event: EventId) -> Self {
        self.on(event, StateId::NONE)
    }

    /// Attach the state's action (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&ActionContext, &[u8]) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> Result<StateDescriptor, BuildError> {
        let id = self.id.ok_or(BuildError::MissingStateId)?;
        let default_child = self.initial.unwrap_or(id);

        Ok(StateDescriptor::new(
            id,
            default_child,
            self.parent,
            self.transitions,
            self.action,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = StateBuilder::new().on(EventId::new(1), StateId::new(2)).build();

        assert!(matches!(result, Err(BuildError::MissingStateId)));
    }

    #[test]
    fn defaults_to_root_leaf() {
        let state = StateBuilder::new().id(StateId::new(4)).build().unwrap();

        assert!(state.is_leaf());
        assert_eq!(state.parent(), None);
        assert!(state.transitions().is_empty());
        assert!(state.action().is_none());
    }

    #[test]
    fn fluent_api_builds_composite() {
        let state = StateBuilder::new()
            .id(StateId::new(3))
            .initial(StateId::new(5))
            .on(EventId::new(3), StateId::new(4))
            .internal(EventId::new(8))
            .action(|_, _| {})
            .build()
            .unwrap();

        assert!(!state.is_leaf());
        assert_eq!(state.default_child(), StateId::new(5));
        assert_eq!(
            state.transitions(),
            &[
                Transition::new(EventId::new(3), StateId::new(4)),
                Transition::new(EventId::new(8), StateId::NONE),
            ]
        );
        assert!(state.action().is_some());
    }

    #[test]
    fn parent_is_recorded() {
        let state = StateBuilder::new()
            .id(StateId::new(6))
            .parent(StateId::new(3))
            .build()
            .unwrap();

        assert_eq!(state.parent(), Some(StateId::new(3)));
    }
}
