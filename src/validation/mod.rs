//! Construction-time validation of state tables.
//!
//! Checks run once, when a table is built, and use Stillwater's `Validation`
//! to accumulate every violation instead of stopping at the first one. The
//! dispatch engine never re-validates: a [`StateTable`](crate::core::StateTable)
//! that exists is well-formed.
//!
//! # Example
//!
//! ```rust
//! use hsm_dispatch::core::{StateDescriptor, StateId};
//! use hsm_dispatch::validation::{validate_table, TableViolation};
//!
//! let states = vec![
//!     StateDescriptor::new(StateId::new(1), StateId::new(1), StateId::new(7), Vec::new(), None),
//! ];
//!
//! let result = validate_table(&states);
//! assert!(result.is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_table, Check};
pub use violations::{TableError, TableViolation};
