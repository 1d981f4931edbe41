//! Serialized form of a state table.
//!
//! Table generators emit a [`TableSchema`]: plain ids, transition pairs and
//! action *names*. Loading binds those names to callbacks through an
//! [`ActionRegistry`] and validates the result into a
//! [`StateTable`](crate::core::StateTable).
//!
//! Schemas travel as JSON for review and as bincode for flash images.

use crate::core::{EventId, StateDescriptor, StateId, StateTable, Transition};
use serde::{Deserialize, Serialize};

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::ActionRegistry;

/// Version identifier for the schema format
pub const SCHEMA_VERSION: u32 = 1;

/// One state as written by the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub id: StateId,

    /// Equal to `id` for leaves
    pub default_child: StateId,

    /// `0` for root-level states
    pub parent: StateId,

    /// `(event, target)` pairs in match order
    #[serde(default)]
    pub transitions: Vec<(EventId, StateId)>,

    /// Registry name of the state's action
    #[serde(default)]
    pub action: Option<String>,
}

/// Serializable description of a whole machine.
///
/// # Example
///
/// ```rust
/// use hsm_dispatch::core::StateId;
/// use hsm_dispatch::engine::Machine;
/// use hsm_dispatch::schema::{ActionRegistry, TableSchema};
///
/// let json = r#"{
///     "version": 1,
///     "name": "Blinker",
///     "initial": 1,
///     "states": [
///         { "id": 1, "default_child": 2, "parent": 0 },
///         { "id": 2, "default_child": 2, "parent": 1, "transitions": [[1, 3]] },
///         { "id": 3, "default_child": 3, "parent": 1, "transitions": [[1, 2]], "action": "off" }
///     ]
/// }"#;
///
/// let schema = TableSchema::from_json(json).unwrap();
/// let registry = ActionRegistry::new().register("off", |_, _| {});
/// let table = schema.into_table(&registry).unwrap();
///
/// let machine = Machine::new(&table, schema.initial).unwrap();
/// assert_eq!(machine.current_state(), StateId::new(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schema format version
    pub version: u32,

    /// Machine name, for diagnostics
    pub name: String,

    /// State entered at start-up
    pub initial: StateId,

    pub states: Vec<StateRecord>,
}

impl TableSchema {
    /// Create an empty schema at the current version.
    pub fn new(name: impl Into<String>, initial: StateId) -> Self {
        Self {
            version: SCHEMA_VERSION,
            name: name.into(),
            initial,
            states: Vec::new(),
        }
    }

    /// Parse and version-check a JSON schema.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)
            .map_err(|e| SchemaError::DeserializationFailed(e.to_string()))?;
        schema.check_version()?;
        Ok(schema)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::SerializationFailed(e.to_string()))
    }

    /// Decode and version-check a bincode schema.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchemaError> {
        let schema: Self = bincode::deserialize(bytes)
            .map_err(|e| SchemaError::DeserializationFailed(e.to_string()))?;
        schema.check_version()?;
        Ok(schema)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SchemaError> {
        bincode::serialize(self).map_err(|e| SchemaError::SerializationFailed(e.to_string()))
    }

    fn check_version(&self) -> Result<(), SchemaError> {
        if self.version == SCHEMA_VERSION {
            Ok(())
        } else {
            Err(SchemaError::UnsupportedVersion {
                found: self.version,
                supported: SCHEMA_VERSION,
            })
        }
    }

    /// Bind action names and validate into a table.
    ///
    /// States without an action name get no action. A name missing from
    /// `registry` is an error rather than a silent no-op.
    pub fn into_table(&self, registry: &ActionRegistry) -> Result<StateTable, SchemaError> {
        self.check_version()?;

        let states = self
            .states
            .iter()
            .map(|record| record.to_descriptor(registry))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(name = %self.name, states = states.len(), "loading state table");
        Ok(StateTable::new(states)?)
    }
}

impl StateRecord {
    fn to_descriptor(&self, registry: &ActionRegistry) -> Result<StateDescriptor, SchemaError> {
        let action = match &self.action {
            Some(name) => Some(registry.get(name).cloned().ok_or_else(|| {
                SchemaError::UnknownAction {
                    state: self.id,
                    name: name.clone(),
                }
            })?),
            None => None,
        };

        let transitions = self
            .transitions
            .iter()
            .map(|&(event, target)| Transition::new(event, target))
            .collect();

        Ok(StateDescriptor::new(
            self.id,
            self.default_child,
            self.parent,
            transitions,
            action,
        ))
    }
}
