//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every declared state,
//! the table of events it reacts to. Declaration order is preserved so that
//! queries over the state set are deterministic.

use super::id::Id;
use crate::builder::error::{ConfigError, ConfigViolation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outgoing transitions of a single state, keyed by event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateConfig<S: Id, E: Id> {
    /// Event to destination state
    #[serde(default)]
    pub transitions: IndexMap<E, S>,
}

impl<S: Id, E: Id> Default for StateConfig<S, E> {
    fn default() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }
}

impl<S: Id, E: Id> FromIterator<(E, S)> for StateConfig<S, E> {
    fn from_iter<I: IntoIterator<Item = (E, S)>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

/// Machine configuration: initial state plus per-state transition tables.
///
/// The configuration is read-only once a machine is built from it and can be
/// shared between machines behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use rewind::core::Config;
///
/// let config: Config<String, String> = Config::from_json(
///     r#"{
///         "initial": "A",
///         "states": {
///             "A": { "transitions": { "T": "B" } },
///             "B": { "transitions": { "T": "C" } },
///             "C": { "transitions": {} }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "A");
/// assert_eq!(config.target(&"A".into(), &"T".into()), Some(&"B".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Config<S: Id, E: Id> {
    /// State the machine starts in and returns to on reset
    pub initial: S,
    /// Declared states in declaration order
    pub states: IndexMap<S, StateConfig<S, E>>,
}

impl<S: Id, E: Id> Config<S, E> {
    /// Create a configuration with no declared states.
    ///
    /// The initial state still has to be declared with [`Config::with_state`]
    /// before the configuration validates.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            states: IndexMap::new(),
        }
    }

    /// Declare a state together with its transition table.
    ///
    /// Declaring the same state twice replaces its table but keeps its
    /// original position.
    pub fn with_state<I>(mut self, state: S, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, S)>,
    {
        self.states.insert(state, transitions.into_iter().collect());
        self
    }

    /// Parse a configuration from JSON, keeping the declared key order.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check if a state is declared.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Transition table of a state, or `None` if it is not declared.
    pub fn transitions(&self, state: &S) -> Option<&IndexMap<E, S>> {
        self.states.get(state).map(|s| &s.transitions)
    }

    /// Destination reached from `state` on `event`, if any.
    pub fn target(&self, state: &S, event: &E) -> Option<&S> {
        self.transitions(state).and_then(|t| t.get(event))
    }

    /// All declared states in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    /// Declared states whose table contains `event`, in declaration order.
    pub fn states_handling<'a: 'e, 'e>(&'a self, event: &'e E) -> impl Iterator<Item = &'a S> + 'e {
        self.states
            .iter()
            .filter(move |(_, s)| s.transitions.contains_key(event))
            .map(|(id, _)| id)
    }

    /// Validate the configuration, accumulating ALL violations.
    ///
    /// Checks that the initial state is declared and that every transition
    /// points at a declared state.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let initial = if self.contains_state(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownInitialState {
                state: self.initial.name().to_string(),
            })
        };
        checks.push(initial);

        for (from, state) in &self.states {
            for (event, to) in &state.transitions {
                if !self.contains_state(to) {
                    checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        to: to.name().to_string(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`Config::validate`] collapsed into a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
