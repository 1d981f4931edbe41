//! State descriptors and transition records.
//!
//! A descriptor is plain data: the state's id, its place in the tree, the
//! rules it owns and an optional action. Behaviour lives in the dispatch
//! engine, never in the descriptor.

use super::ids::{EventId, StateId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Context handed to an action when its state supplies the matching rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionContext {
    /// The event being dispatched.
    pub event: EventId,
    /// The state whose transition list matched (owner of the action).
    pub state: StateId,
    /// The active leaf when the event arrived.
    pub current: StateId,
}

/// Callback attached to a state.
///
/// Receives the dispatch context and the argument bytes passed to
/// `process_event`, untouched.
pub type Action = Arc<dyn Fn(&ActionContext, &[u8]) + Send + Sync>;

/// One `(event, target)` rule owned by a state.
///
/// A target of [`StateId::NONE`] marks an internal transition: the rule
/// consumes the event and fires the action without leaving the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub event: EventId,
    pub target: StateId,
}

impl Transition {
    pub const fn new(event: EventId, target: StateId) -> Self {
        Self { event, target }
    }

    pub const fn is_internal(&self) -> bool {
        self.target.is_none()
    }
}

/// Immutable description of one state.
///
/// # Example
///
/// ```rust
/// use hsm_dispatch::core::{EventId, StateDescriptor, StateId, Transition};
///
/// let run = StateId::new(3);
/// let led_on = StateId::new(5);
/// let led_off = StateId::new(6);
///
/// let descriptor = StateDescriptor::new(
///     led_on,
///     led_on,
///     run,
///     vec![Transition::new(EventId::new(5), led_off)],
///     None,
/// );
///
/// assert!(descriptor.is_leaf());
/// assert_eq!(descriptor.parent(), Some(run));
/// assert_eq!(descriptor.find(EventId::new(5)).map(|t| t.target), Some(led_off));
/// ```
#[derive(Clone)]
pub struct StateDescriptor {
    id: StateId,
    default_child: StateId,
    parent: StateId,
    transitions: Vec<Transition>,
    action: Option<Action>,
}

impl StateDescriptor {
    /// Create a descriptor from the generator's raw fields.
    ///
    /// `parent` is [`StateId::NONE`] for root-level states and
    /// `default_child == id` for leaves.
    pub fn new(
        id: StateId,
        default_child: StateId,
        parent: StateId,
        transitions: Vec<Transition>,
        action: Option<Action>,
    ) -> Self {
        Self {
            id,
            default_child,
            parent,
            transitions,
            action,
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn default_child(&self) -> StateId {
        self.default_child
    }

    /// Enclosing composite state, `None` at the root.
    pub fn parent(&self) -> Option<StateId> {
        self.parent.to_option()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// A leaf names itself as its default child.
    pub fn is_leaf(&self) -> bool {
        self.default_child == self.id
    }

    /// First rule for `event` in declaration order.
    pub fn find(&self, event: EventId) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.event == event)
    }

    /// Run the action if one is attached.
    pub(crate) fn invoke(&self, context: &ActionContext, arg: &[u8]) {
        if let Some(action) = &self.action {
            action(context, arg);
        }
    }
}

impl fmt::Debug for StateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDescriptor")
            .field("id", &self.id)
            .field("default_child", &self.default_child)
            .field("parent", &self.parent)
            .field("transitions", &self.transitions)
            .field("action", &self.action.as_ref().map(|_| "<action>"))
            .finish()
    }
}
