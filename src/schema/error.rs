//! Schema error types.

use crate::core::StateId;
use crate::validation::TableError;
use thiserror::Error;

/// Errors that can occur when loading a table schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Schema version is not supported by this version
    #[error("Unsupported schema version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// An action name has no registered callback
    #[error("State {state} names unregistered action '{name}'")]
    UnknownAction { state: StateId, name: String },

    /// The described table is malformed
    #[error(transparent)]
    InvalidTable(#[from] TableError),
}
