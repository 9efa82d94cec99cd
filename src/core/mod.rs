//! Core machine data: identifiers, configuration and history.
//!
//! This module contains the plain data the machine is built from:
//! - Identifier trait for states and events
//! - Declarative, order-preserving configuration
//! - Linear history with a cursor for undo/redo

mod config;
mod history;
mod id;

pub use config::{Config, StateConfig};
pub use history::{History, HistoryEntry};
pub use id::Id;
