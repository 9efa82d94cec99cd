//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder, the configuration error types and
//! a macro for declaring enum identifiers with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::{ConfigError, ConfigViolation};
pub use machine::StateMachineBuilder;
