//! Run-to-completion dispatch over a state table.

use crate::core::{ActionContext, EventId, StateDescriptor, StateId, StateTable, Transition};
use crate::engine::error::DispatchError;
use crate::engine::outcome::{Outcome, Step};

/// Handle driving one hierarchical state machine.
///
/// The machine borrows its table and owns exactly one mutable field, the
/// active leaf. Several machines may share a table.
#[derive(Clone, Debug)]
pub struct Machine<'t> {
    table: &'t StateTable,
    current: StateId,
}

impl<'t> Machine<'t> {
    /// Bind `table` and enter `initial`.
    ///
    /// A composite `initial` is resolved to its default leaf. No action runs.
    pub fn new(table: &'t StateTable, initial: StateId) -> Result<Self, DispatchError> {
        let current = table
            .resolve_leaf(initial)
            .ok_or(DispatchError::UnknownState { id: initial })?;
        Ok(Self { table, current })
    }

    /// Active leaf state (pure)
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Table this machine interprets (pure)
    pub fn table(&self) -> &'t StateTable {
        self.table
    }

    /// Whether `id` is the active leaf or one of its ancestors (pure)
    pub fn is_in(&self, id: StateId) -> bool {
        self.table.ancestors(self.current).any(|s| s.id() == id)
    }

    /// Overwrite the active state.
    ///
    /// No descent and no action. The caller is responsible for passing a
    /// leaf; dispatch from anything else is unspecified until a valid leaf is
    /// restored.
    pub fn force_state(&mut self, id: StateId) {
        tracing::debug!(from = %self.current, to = %id, "state forced");
        self.current = id;
    }

    /// Dispatch one event to completion.
    ///
    /// Searches the active leaf and then each ancestor for the first rule
    /// matching `event`. The owner of that rule runs its action with `arg`,
    /// then the machine descends from the target to a leaf and settles there.
    /// An event with no rule anywhere up to the root returns
    /// [`Outcome::Unhandled`] and changes nothing.
    pub fn process_event(&mut self, event: EventId, arg: &[u8]) -> Outcome {
        let from = self.current;

        let Some((source, transition)) = self.find_rule(event) else {
            tracing::trace!(event = %event, state = %from, "event unhandled");
            return Outcome::Unhandled;
        };

        source.invoke(
            &ActionContext {
                event,
                state: source.id(),
                current: from,
            },
            arg,
        );

        let to = self.settle(transition.target);
        self.current = to;

        let step = Step {
            event,
            from,
            source: source.id(),
            target: transition.target,
            to,
        };
        tracing::debug!(
            event = %event,
            from = %from,
            source = %step.source,
            to = %to,
            "event handled"
        );
        Outcome::Handled(step)
    }

    /// First rule for `event` on the active leaf's ancestor chain.
    fn find_rule(&self, event: EventId) -> Option<(&'t StateDescriptor, Transition)> {
        if !self.table.contains(self.current) {
            tracing::warn!(state = %self.current, "active state missing from table");
            return None;
        }

        self.table.ancestors(self.current).find_map(|state| {
            let rule = state.find(event);
            if rule.is_none() {
                tracing::trace!(event = %event, state = %state.id(), "bubbling to parent");
            }
            rule.map(|t| (state, *t))
        })
    }

    /// Leaf to enter for `target`. Internal rules stay put.
    fn settle(&self, target: StateId) -> StateId {
        if target.is_none() {
            return self.current;
        }
        self.table.resolve_leaf(target).unwrap_or_else(|| {
            tracing::warn!(state = %target, "target does not resolve to a leaf");
            target
        })
    }
}
