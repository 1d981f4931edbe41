//! State and event identifiers.
//!
//! Identifiers are small integers assigned by the table generator. They are
//! wrapped in newtypes so a state id can never be passed where an event id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a state within one table.
///
/// Value `0` is reserved as [`StateId::NONE`], the "no parent" sentinel.
///
/// # Example
///
/// ```rust
/// use hsm_dispatch::core::StateId;
///
/// let root = StateId::new(3);
/// assert!(!root.is_none());
/// assert_eq!(root.get(), 3);
/// assert_eq!(StateId::NONE.to_option(), None);
/// assert_eq!(root.to_option(), Some(root));
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StateId(u16);

impl StateId {
    /// The "no state" sentinel, used for root-level parents.
    pub const NONE: StateId = StateId(0);

    pub const fn new(raw: u16) -> Self {
        StateId(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u16 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    pub const fn to_option(self) -> Option<StateId> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<u16> for StateId {
    fn from(raw: u16) -> Self {
        StateId(raw)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Identifier of an event.
///
/// The engine only compares event ids for equality; their meaning belongs to
/// the application.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(u16);

impl EventId {
    pub const fn new(raw: u16) -> Self {
        EventId(raw)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for EventId {
    fn from(raw: u16) -> Self {
        EventId(raw)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
