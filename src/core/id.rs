//! Identifier trait for states and events.
//!
//! States and events are opaque, comparable, hashable values. Anything that
//! satisfies [`Id`] can key a configuration; `String` works out of the box
//! and enums can opt in through [`id_enum!`](crate::id_enum).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into history entries
/// - `Eq` + `Hash`: identifiers key the configuration maps
/// - `Debug`: identifiers show up in diagnostics
/// - `Serialize` + `DeserializeOwned`: configurations load from JSON
///
/// # Example
///
/// ```rust
/// use rewind::core::Id;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl Id for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(Light::Red.name(), "Red");
/// assert_eq!("Green".to_string().name(), "Green");
/// ```
pub trait Id: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Human readable name used in errors and log fields.
    fn name(&self) -> &str;
}

impl Id for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
