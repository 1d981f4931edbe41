//! Dispatch engine errors.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when binding a machine to a table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("State {id} is not in the table")]
    UnknownState { id: StateId },
}
