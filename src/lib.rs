//! Rewind: a declarative finite state machine with linear undo/redo
//!
//! A machine is built from a read-only configuration that names an initial
//! state and, for each state, the events it reacts to. Every move is checked
//! against that configuration and recorded in a single-branch history that
//! can be walked back and forth.
//!
//! # Core Concepts
//!
//! - **Config**: Initial state plus ordered per-state transition tables
//! - **StateMachine**: Validates `change_state` / `trigger` and owns the history
//! - **History**: Timeline with a cursor; recording after an undo drops the old future
//!
//! # Example
//!
//! ```rust
//! use rewind::builder::StateMachineBuilder;
//! use rewind::core::Config;
//!
//! let config: Config<String, String> = Config::new("A".to_string())
//!     .with_state("A".into(), [("T".into(), "B".into())])
//!     .with_state("B".into(), [("T".into(), "C".into())])
//!     .with_state("C".into(), []);
//!
//! let mut machine = StateMachineBuilder::new().config(config).build().unwrap();
//!
//! machine.trigger(&"T".to_string()).unwrap();
//! machine.trigger(&"T".to_string()).unwrap();
//! assert!(machine.undo());
//! assert!(machine.undo());
//! assert!(machine.redo());
//!
//! // A new move from the middle of the history discards the undone branch
//! machine.change_state("C".to_string()).unwrap();
//! assert!(!machine.redo());
//! assert_eq!(machine.state(), "C");
//! ```

pub mod builder;
pub mod core;
pub mod fsm;

// Re-export commonly used types
pub use self::core::{Config, History, Id, StateConfig};
pub use builder::{ConfigError, ConfigViolation, StateMachineBuilder};
pub use fsm::{StateMachine, TransitionError};
