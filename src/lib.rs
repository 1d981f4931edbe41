//! hsm-dispatch: table-driven hierarchical state machines
//!
//! States are plain data records in a flat, validated table. A [`Machine`]
//! interprets the table one event at a time, run-to-completion: it looks up
//! the active leaf's rules, bubbles unmatched events to enclosing states,
//! runs the action of the state that matched, and descends through default
//! children until it settles on a leaf.
//!
//! # Core Concepts
//!
//! - **Table**: immutable [`StateTable`] of [`StateDescriptor`]s, validated once
//! - **Machine**: caller-owned handle holding the active leaf
//! - **Outcome**: every event is either `Handled` or `Unhandled`; ignoring an
//!   event is normal, not an error
//!
//! # Example
//!
//! ```rust
//! use hsm_dispatch::builder::{StateBuilder, TableBuilder};
//! use hsm_dispatch::core::{EventId, StateId};
//! use hsm_dispatch::engine::{Machine, Outcome};
//!
//! let run = StateId::new(1);
//! let led_on = StateId::new(2);
//! let led_off = StateId::new(3);
//! let fault = StateId::new(4);
//! let tick = EventId::new(1);
//! let error = EventId::new(2);
//!
//! let table = TableBuilder::new()
//!     .state(StateBuilder::new().id(run).initial(led_on).on(error, fault))?
//!     .state(StateBuilder::new().id(led_on).parent(run).on(tick, led_off))?
//!     .state(StateBuilder::new().id(led_off).parent(run).on(tick, led_on))?
//!     .state(StateBuilder::new().id(fault))?
//!     .build()?;
//!
//! let mut machine = Machine::new(&table, run)?;
//! assert_eq!(machine.current_state(), led_on);
//!
//! machine.process_event(tick, &[]);
//! assert_eq!(machine.current_state(), led_off);
//!
//! // led_off has no rule for `error`; its parent does
//! let outcome = machine.process_event(error, &[]);
//! assert!(outcome.is_handled());
//! assert_eq!(machine.current_state(), fault);
//!
//! assert_eq!(machine.process_event(tick, &[]), Outcome::Unhandled);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod schema;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{ActionContext, EventId, StateDescriptor, StateId, StateTable, Transition};
pub use crate::engine::{Machine, Outcome, Step};
