//! Configuration errors raised while building a state machine.

use thiserror::Error;

/// Errors that can occur when supplying a configuration to a machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("No configuration supplied. Call .config(config) before .build()")]
    Missing,

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Structural problems found when validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Initial state '{state}' is not declared")]
    UnknownInitialState { state: String },

    #[error("Transition '{event}' from '{from}' targets undeclared state '{to}'")]
    UnknownTarget {
        from: String,
        event: String,
        to: String,
    },
}
