//! Builder for constructing state machines.

use crate::builder::error::ConfigError;
use crate::core::{Config, Id};
use crate::fsm::StateMachine;
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: Id, E: Id> {
    config: Option<Arc<Config<S, E>>>,
}

impl<S: Id, E: Id> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: Config<S, E>) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// Set a configuration shared with other machines (required).
    pub fn shared_config(mut self, config: Arc<Config<S, E>>) -> Self {
        self.config = Some(config);
        self
    }

    /// Parse and set a JSON configuration (required).
    /// Returns an error if the JSON does not describe a configuration.
    pub fn json_config(self, json: &str) -> Result<Self, ConfigError> {
        let config = Config::from_json(json)?;
        Ok(self.config(config))
    }

    /// Build the state machine.
    /// Returns an error if no configuration was supplied or it fails validation.
    pub fn build(self) -> Result<StateMachine<S, E>, ConfigError> {
        let config = self.config.ok_or(ConfigError::Missing)?;
        StateMachine::new(config)
    }
}

impl<S: Id, E: Id> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
