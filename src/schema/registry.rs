//! Named action callbacks.

use crate::core::{Action, ActionContext};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps the action names used in a schema to callbacks.
///
/// # Example
///
/// ```rust
/// use hsm_dispatch::schema::ActionRegistry;
///
/// let registry = ActionRegistry::new()
///     .register("blink", |ctx, _arg| println!("event {} in {}", ctx.event, ctx.state));
///
/// assert!(registry.get("blink").is_some());
/// assert!(registry.get("beep").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register `action` under `name`, replacing any previous entry.
    pub fn register<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&ActionContext, &[u8]) + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(action));
        self
    }

    /// Register an already shared action.
    pub fn insert(&mut self, name: impl Into<String>, action: Action) {
        self.actions.insert(name.into(), action);
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ActionRegistry")
            .field("actions", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventId, StateId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn register_replaces_previous_entry() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let registry = ActionRegistry::new()
            .register("tick", |_, _| panic!("replaced action must not run"))
            .register("tick", move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let context = ActionContext {
            event: EventId::new(1),
            state: StateId::new(1),
            current: StateId::new(1),
        };
        (registry.get("tick").unwrap())(&context, &[]);

        assert_eq!(registry.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_lists_sorted_names() {
        let registry = ActionRegistry::new()
            .register("b", |_, _| {})
            .register("a", |_, _| {});

        assert_eq!(
            format!("{registry:?}"),
            r#"ActionRegistry { actions: ["a", "b"] }"#
        );
    }

    #[test]
    fn empty_registry() {
        let registry = ActionRegistry::default();
        assert!(registry.is_empty());
    }
}
