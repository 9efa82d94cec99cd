//! State machine driven by a declarative configuration.

use crate::builder::error::ConfigError;
use crate::core::{Config, History, Id};
use crate::fsm::error::TransitionError;
use std::sync::Arc;
use tracing::{debug, warn};

/// State machine that validates moves against its configuration and keeps
/// a linear undo/redo history.
///
/// The configuration is shared read-only; each machine owns its current
/// state and history. A machine is not internally synchronized, wrap it in
/// a `Mutex` to share it across threads.
///
/// # Example
///
/// ```rust
/// use rewind::core::Config;
/// use rewind::fsm::StateMachine;
///
/// let config: Config<String, String> = Config::new("A".to_string())
///     .with_state("A".into(), [("T".into(), "B".into())])
///     .with_state("B".into(), [("T".into(), "C".into())])
///     .with_state("C".into(), []);
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger(&"T".to_string()).unwrap();
/// machine.trigger(&"T".to_string()).unwrap();
/// assert_eq!(machine.state(), "C");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: Id, E: Id> {
    config: Arc<Config<S, E>>,
    current: S,
    history: History<S>,
}

impl<S: Id, E: Id> StateMachine<S, E> {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails with [`ConfigError::Invalid`] if the initial state or any
    /// transition target is not declared.
    pub fn new(config: impl Into<Arc<Config<S, E>>>) -> Result<Self, ConfigError> {
        let config = config.into();
        config.check()?;

        let initial = config.initial.clone();
        debug!(initial = initial.name(), "state machine created");

        Ok(Self {
            history: History::new(initial.clone()),
            current: initial,
            config,
        })
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Get the shared configuration (pure)
    pub fn config(&self) -> &Arc<Config<S, E>> {
        &self.config
    }

    /// Get state history (pure)
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Move directly to a declared state and record it in the history.
    pub fn change_state(&mut self, target: S) -> Result<(), TransitionError> {
        if !self.config.contains_state(&target) {
            warn!(state = target.name(), "rejected change to undeclared state");
            return Err(TransitionError::UnknownState {
                state: target.name().to_string(),
            });
        }

        debug!(
            from = self.current.name(),
            to = target.name(),
            "state changed"
        );
        self.enter(target);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    pub fn trigger(&mut self, event: &E) -> Result<(), TransitionError> {
        let Some(target) = self.config.target(&self.current, event).cloned() else {
            warn!(
                state = self.current.name(),
                event = event.name(),
                "rejected event without transition"
            );
            return Err(TransitionError::NoSuchTransition {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        debug!(
            from = self.current.name(),
            event = event.name(),
            to = target.name(),
            "event triggered"
        );
        self.enter(target);
        Ok(())
    }

    fn enter(&mut self, target: S) {
        self.history.record(target.clone());
        self.current = target;
    }

    /// Return to the initial state.
    ///
    /// This does not record a history entry or move the cursor, so a later
    /// undo/redo navigates relative to where the history was before the
    /// reset.
    pub fn reset(&mut self) {
        debug!(
            from = self.current.name(),
            to = self.config.initial.name(),
            "state reset"
        );
        self.current = self.config.initial.clone();
    }

    /// Declared states in declaration order.
    ///
    /// With an event, only the states whose transition table contains it.
    pub fn states(&self, event: Option<&E>) -> Vec<&S> {
        match event {
            None => self.config.state_ids().collect(),
            Some(event) => self.config.states_handling(event).collect(),
        }
    }

    /// Events the current state reacts to, in declaration order.
    pub fn available_events(&self) -> Vec<&E> {
        self.config
            .transitions(&self.current)
            .map(|t| t.keys().collect())
            .unwrap_or_default()
    }

    /// Go back to the previous state in the history.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.history.undo().cloned() else {
            return false;
        };

        debug!(
            from = self.current.name(),
            to = state.name(),
            cursor = self.history.cursor(),
            "undo"
        );
        self.current = state;
        true
    }

    /// Go forward to the next state in the history.
    ///
    /// Returns `false` if already at the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.history.redo().cloned() else {
            return false;
        };

        debug!(
            from = self.current.name(),
            to = state.name(),
            cursor = self.history.cursor(),
            "redo"
        );
        self.current = state;
        true
    }

    /// Check if [`StateMachine::undo`] would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if [`StateMachine::redo`] would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all history entries. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::ConfigViolation;
    use crate::id_enum;

    id_enum! {
        enum Door {
            Closed,
            Open,
            Locked,
        }
    }

    id_enum! {
        enum Action {
            Open,
            Close,
            Lock,
            Unlock,
        }
    }

    fn door() -> Config<Door, Action> {
        Config::new(Door::Closed)
            .with_state(
                Door::Closed,
                [(Action::Open, Door::Open), (Action::Lock, Door::Locked)],
            )
            .with_state(Door::Open, [(Action::Close, Door::Closed)])
            .with_state(Door::Locked, [(Action::Unlock, Door::Closed)])
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = StateMachine::new(door()).unwrap();

        assert_eq!(machine.state(), &Door::Closed);
        assert_eq!(machine.history().path(), vec![&Door::Closed]);
        assert!(!machine.can_undo());
        assert!(!machine.can_redo());
    }

    #[test]
    fn new_rejects_undeclared_initial_state() {
        let config = Config::new(Door::Locked)
            .with_state(Door::Closed, [(Action::Open, Door::Open)])
            .with_state(Door::Open, []);

        let result = StateMachine::new(config);

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![ConfigViolation::UnknownInitialState {
                        state: "Locked".to_string()
                    }]
                );
            }
            _ => panic!("Expected invalid configuration"),
        }
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut machine = StateMachine::new(door()).unwrap();

        machine.trigger(&Action::Lock).unwrap();
        assert_eq!(machine.state(), &Door::Locked);

        machine.trigger(&Action::Unlock).unwrap();
        assert_eq!(machine.state(), &Door::Closed);
        assert_eq!(
            machine.history().path(),
            vec![&Door::Closed, &Door::Locked, &Door::Closed]
        );
    }

    #[test]
    fn trigger_without_transition_leaves_machine_untouched() {
        let mut machine = StateMachine::new(door()).unwrap();

        let result = machine.trigger(&Action::Close);

        assert_eq!(
            result,
            Err(TransitionError::NoSuchTransition {
                state: "Closed".to_string(),
                event: "Close".to_string(),
            })
        );
        assert_eq!(machine.state(), &Door::Closed);
        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.history().cursor(), 0);
    }

    #[test]
    fn change_state_ignores_transition_table() {
        let mut machine = StateMachine::new(door()).unwrap();

        machine.trigger(&Action::Open).unwrap();
        machine.change_state(Door::Locked).unwrap();

        assert_eq!(machine.state(), &Door::Locked);
        assert_eq!(machine.history().cursor(), 2);
    }

    #[test]
    fn change_state_rejects_undeclared_state() {
        let config = Config::new(Door::Closed)
            .with_state(Door::Closed, [(Action::Open, Door::Open)])
            .with_state(Door::Open, []);
        let mut machine = StateMachine::new(config).unwrap();

        let result = machine.change_state(Door::Locked);

        assert_eq!(
            result,
            Err(TransitionError::UnknownState {
                state: "Locked".to_string()
            })
        );
        assert_eq!(machine.state(), &Door::Closed);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn available_events_follow_current_state() {
        let mut machine = StateMachine::new(door()).unwrap();
        assert_eq!(
            machine.available_events(),
            vec![&Action::Open, &Action::Lock]
        );

        machine.trigger(&Action::Open).unwrap();
        assert_eq!(machine.available_events(), vec![&Action::Close]);
    }

    #[test]
    fn states_filters_by_event() {
        let machine = StateMachine::new(door()).unwrap();

        assert_eq!(
            machine.states(None),
            vec![&Door::Closed, &Door::Open, &Door::Locked]
        );
        assert_eq!(machine.states(Some(&Action::Close)), vec![&Door::Open]);
        assert!(machine.states(Some(&Action::Lock)).len() == 1);
    }

    #[test]
    fn states_outlive_the_event_borrow() {
        let machine = StateMachine::new(door()).unwrap();

        let handlers = {
            let event = Action::Unlock;
            machine.states(Some(&event))
        };

        assert_eq!(handlers, vec![&Door::Locked]);
    }

    #[test]
    fn machines_share_configuration() {
        let config = Arc::new(door());
        let mut first = StateMachine::new(Arc::clone(&config)).unwrap();
        let second = StateMachine::new(Arc::clone(&config)).unwrap();

        first.trigger(&Action::Open).unwrap();

        assert_eq!(first.state(), &Door::Open);
        assert_eq!(second.state(), &Door::Closed);
        assert!(Arc::ptr_eq(first.config(), second.config()));
    }

    #[test]
    fn reset_keeps_history_and_cursor() {
        let mut machine = StateMachine::new(door()).unwrap();
        machine.trigger(&Action::Open).unwrap();

        machine.reset();

        assert_eq!(machine.state(), &Door::Closed);
        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().cursor(), 1);
        assert_eq!(machine.history().current(), Some(&Door::Open));
    }
}
