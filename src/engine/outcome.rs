//! Results of dispatching one event.

use crate::core::{EventId, StateId};
use serde::{Deserialize, Serialize};

/// Details of a handled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The dispatched event.
    pub event: EventId,
    /// Active leaf before the event.
    pub from: StateId,
    /// State whose transition list supplied the rule.
    pub source: StateId,
    /// Target declared by the rule, before default-child descent.
    pub target: StateId,
    /// Active leaf after the event.
    pub to: StateId,
}

impl Step {
    /// The rule came from an ancestor rather than the active leaf.
    pub fn bubbled(&self) -> bool {
        self.source != self.from
    }

    /// The rule consumed the event without changing state.
    pub fn is_internal(&self) -> bool {
        self.target.is_none()
    }
}

/// Whether an event found a rule along the active state's ancestor chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A rule matched; its action ran and the machine settled on `to`.
    Handled(Step),

    /// No rule matched anywhere up to the root. Nothing changed.
    Unhandled,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled)
    }

    pub fn step(&self) -> Option<&Step> {
        match self {
            Self::Handled(step) => Some(step),
            Self::Unhandled => None,
        }
    }
}
