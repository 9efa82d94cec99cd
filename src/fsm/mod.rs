//! The state machine runtime.
//!
//! Validates state changes and event triggers against a shared
//! configuration and keeps the history consistent with every move.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::StateMachine;
