//! Builder for constructing state tables.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{StateDescriptor, StateTable};

/// Builder for constructing state tables with a fluent API.
pub struct TableBuilder {
    states: Vec<StateDescriptor>,
}

impl TableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails validation.
    pub fn state(mut self, builder: StateBuilder) -> Result<Self, BuildError> {
        let state = builder.build()?;
        self.states.push(state);
        Ok(self)
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: StateDescriptor) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: Vec<StateDescriptor>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build and validate the table.
    pub fn build(self) -> Result<StateTable, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(StateTable::new(self.states)?)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
