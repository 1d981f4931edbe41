//! The state descriptor table.
//!
//! A table is validated once when it is built and is read-only afterwards.
//! Lookups go through a dense slot vector indexed by the raw state id.

use super::descriptor::StateDescriptor;
use super::ids::StateId;
use crate::validation::{validate_table, TableError};
use stillwater::validation::Validation;

/// Validated, immutable table of state descriptors.
///
/// # Example
///
/// ```rust
/// use hsm_dispatch::core::{StateDescriptor, StateId, StateTable};
///
/// let run = StateId::new(1);
/// let idle = StateId::new(2);
///
/// let table = StateTable::new(vec![
///     StateDescriptor::new(run, idle, StateId::NONE, Vec::new(), None),
///     StateDescriptor::new(idle, idle, run, Vec::new(), None),
/// ])
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.resolve_leaf(run), Some(idle));
/// ```
#[derive(Clone, Debug)]
pub struct StateTable {
    states: Vec<StateDescriptor>,
    slots: Vec<Option<usize>>,
}

impl StateTable {
    /// Validate `states` and index them by id.
    ///
    /// Every defect is reported at once in the returned [`TableError`].
    pub fn new(states: Vec<StateDescriptor>) -> Result<Self, TableError> {
        match validate_table(&states) {
            Validation::Success(_) => Ok(Self::index(states)),
            Validation::Failure(violations) => {
                Err(TableError::new(violations.iter().cloned().collect()))
            }
        }
    }

    fn index(states: Vec<StateDescriptor>) -> Self {
        let width = states
            .iter()
            .map(|s| usize::from(s.id().get()) + 1)
            .max()
            .unwrap_or(0);
        let mut slots = vec![None; width];
        for (position, state) in states.iter().enumerate() {
            slots[usize::from(state.id().get())] = Some(position);
        }
        Self { states, slots }
    }

    /// Descriptor for `id`, `None` if the table has no such state.
    pub fn get(&self, id: StateId) -> Option<&StateDescriptor> {
        let position = (*self.slots.get(usize::from(id.get()))?)?;
        self.states.get(position)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Descriptors in the order they were supplied.
    pub fn iter(&self) -> impl Iterator<Item = &StateDescriptor> {
        self.states.iter()
    }

    pub fn is_leaf(&self, id: StateId) -> bool {
        self.get(id).is_some_and(StateDescriptor::is_leaf)
    }

    /// Follow default children from `id` down to a leaf.
    ///
    /// Returns `None` if `id` is unknown. The walk is bounded by the table
    /// length.
    pub fn resolve_leaf(&self, id: StateId) -> Option<StateId> {
        let mut candidate = self.get(id)?;
        for _ in 0..self.states.len() {
            if candidate.is_leaf() {
                return Some(candidate.id());
            }
            candidate = self.get(candidate.default_child())?;
        }
        candidate.is_leaf().then(|| candidate.id())
    }

    /// Descriptors from `id` up to its root, `id` first.
    pub fn ancestors(&self, id: StateId) -> Ancestors<'_> {
        Ancestors {
            table: self,
            next: self.get(id),
            remaining: self.states.len(),
        }
    }
}

/// Iterator over a state and its enclosing states.
///
/// Created by [`StateTable::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'t> {
    table: &'t StateTable,
    next: Option<&'t StateDescriptor>,
    remaining: usize,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = &'t StateDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.remaining -= 1;
        self.next = current.parent().and_then(|parent| self.table.get(parent));
        Some(current)
    }
}
