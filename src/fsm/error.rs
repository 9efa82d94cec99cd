//! Errors raised by state changes and event triggers.

use thiserror::Error;

/// Errors that can occur when moving the machine to another state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("State '{state}' is not declared in the configuration")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoSuchTransition { state: String, event: String },
}
