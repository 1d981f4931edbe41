//! Build errors for table and state builders.

use crate::validation::TableError;
use thiserror::Error;

/// Errors that can occur when building states and tables.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State id not specified. Call .id(state) before .build()")]
    MissingStateId,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    InvalidTable(#[from] TableError),
}
