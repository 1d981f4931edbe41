//! The hierarchical dispatch engine.
//!
//! # Key Concepts
//!
//! - **Bubbling**: an event the active leaf does not handle is offered to each
//!   ancestor in turn; the first state with a matching rule wins.
//! - **Action ownership**: the action of the state whose list supplied the
//!   rule runs, not the leaf's and not the target's.
//! - **Default-substate descent**: a rule targeting a composite lands on its
//!   default leaf, recursively.
//! - **Run-to-completion**: lookup, action, descent and the state write all
//!   happen inside one synchronous `process_event` call.
//!
//! A [`Machine`] takes `&mut self` to dispatch, so one handle is driven by
//! one owner at a time. Producers on other tasks must funnel events through
//! a single consumer.

mod error;
mod history;
mod machine;
mod outcome;

pub use error::DispatchError;
pub use history::{DispatchLog, DispatchRecord};
pub use machine::Machine;
pub use outcome::{Outcome, Step};
