//! Core table types.
//!
//! This module contains the data the dispatch engine interprets:
//! - Typed state and event identifiers
//! - State descriptors and their transition records
//! - The validated, read-only state table
//!
//! Nothing here mutates after construction.

mod descriptor;
mod ids;
mod table;

pub use descriptor::{Action, ActionContext, StateDescriptor, Transition};
pub use ids::{EventId, StateId};
pub use table::{Ancestors, StateTable};
