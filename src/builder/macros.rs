//! Macros for declaring named ids.

/// Declare a module of named state or event id constants.
///
/// Mirrors the constants a table generator emits in its header, plus a
/// reverse lookup for log output.
///
/// # Example
///
/// ```
/// use hsm_dispatch::ids;
///
/// ids! {
///     pub mod state: StateId {
///         SETUP = 1,
///         BOOTLOADER = 2,
///     }
/// }
///
/// ids! {
///     pub mod event: EventId {
///         SELFCHECKDONE = 1,
///     }
/// }
///
/// assert_eq!(state::BOOTLOADER.get(), 2);
/// assert_eq!(state::name_of(state::SETUP), Some("SETUP"));
/// assert_eq!(event::ALL.len(), 1);
/// ```
#[macro_export]
macro_rules! ids {
    (
        $(#[$meta:meta])*
        $vis:vis mod $module:ident : $kind:ident {
            $(
                $(#[$item_meta:meta])*
                $name:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis mod $module {
            $(
                $(#[$item_meta])*
                pub const $name: $crate::core::$kind = $crate::core::$kind::new($value);
            )*

            /// Every declared id, in declaration order.
            pub const ALL: &[$crate::core::$kind] = &[$($name),*];

            /// Declared name of `id`, if any.
            pub fn name_of(id: $crate::core::$kind) -> Option<&'static str> {
                $(
                    if id == $name {
                        return Some(stringify!($name));
                    }
                )*
                None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EventId, StateId};

    ids! {
        mod state: StateId {
            SETUP = 1,
            BOOTLOADER = 2,
            RUNMAIN = 3,
        }
    }

    ids! {
        mod event: EventId {
            /// Power-on self check finished.
            SELFCHECKDONE = 1,
            FILELOADED = 2,
        }
    }

    #[test]
    fn ids_macro_generates_constants() {
        assert_eq!(state::SETUP, StateId::new(1));
        assert_eq!(state::RUNMAIN.get(), 3);
        assert_eq!(event::FILELOADED, EventId::new(2));
    }

    #[test]
    fn name_of_reverses_lookup() {
        assert_eq!(state::name_of(StateId::new(2)), Some("BOOTLOADER"));
        assert_eq!(state::name_of(StateId::new(9)), None);
        assert_eq!(event::name_of(event::SELFCHECKDONE), Some("SELFCHECKDONE"));
    }

    #[test]
    fn all_keeps_declaration_order() {
        let raw: Vec<u16> = state::ALL.iter().map(|s| s.get()).collect();
        assert_eq!(raw, vec![1, 2, 3]);
    }

    #[test]
    fn ids_macro_supports_visibility() {
        ids! {
            pub mod public_state: StateId {
                A = 10,
            }
        }

        assert_eq!(public_state::A.get(), 10);
    }
}
