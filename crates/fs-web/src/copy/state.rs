//! Confirmation state machine behind the copy button.
//!
//! `Idle --activate--> Confirming --window elapsed--> Idle`, and activating
//! while confirming restarts the window. Each activation hands out a
//! generation token; only the reset carrying the latest token returns the
//! machine to `Idle`, so a timer left over from an earlier click can never
//! cut a newer window short.

use std::time::Duration;

/// How long the "just copied" state stays visible after the last click.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_millis(2000);

/// Visual state of a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Confirming,
}

impl CopyState {
    /// Value used for the `data-state` styling hook.
    pub fn as_str(self) -> &'static str {
        match self {
            CopyState::Idle => "idle",
            CopyState::Confirming => "confirming",
        }
    }

    pub fn is_confirming(self) -> bool {
        self == CopyState::Confirming
    }
}

/// Identifies the activation that scheduled a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

#[derive(Debug, Default)]
pub struct CopyMachine {
    value: String,
    state: CopyState,
    generation: u64,
}

impl CopyMachine {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Enter (or stay in) `Confirming` and return the token the reset timer
    /// must present.
    pub fn activate(&mut self) -> ResetToken {
        self.generation = self.generation.wrapping_add(1);
        self.state = CopyState::Confirming;
        ResetToken(self.generation)
    }

    /// Handle a fired reset timer. Returns true when the state changed.
    pub fn expire(&mut self, token: ResetToken) -> bool {
        if token.0 != self.generation || self.state == CopyState::Idle {
            return false;
        }
        self.state = CopyState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let m = CopyMachine::new("hello");
        assert_eq!(m.state(), CopyState::Idle);
        assert_eq!(m.value(), "hello");
    }

    #[test]
    fn activate_then_expire() {
        let mut m = CopyMachine::new("hello");
        let token = m.activate();
        assert!(m.state().is_confirming());
        assert!(m.expire(token));
        assert_eq!(m.state(), CopyState::Idle);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut m = CopyMachine::default();
        let first = m.activate();
        let second = m.activate();
        assert!(!m.expire(first));
        assert!(m.state().is_confirming());
        assert!(m.expire(second));
        assert!(!m.state().is_confirming());
    }

    #[test]
    fn expire_twice_reports_one_change() {
        let mut m = CopyMachine::default();
        let token = m.activate();
        assert!(m.expire(token));
        assert!(!m.expire(token));
    }

    #[test]
    fn reusable_after_reset() {
        let mut m = CopyMachine::default();
        let token = m.activate();
        m.expire(token);
        let token = m.activate();
        assert_eq!(m.state(), CopyState::Confirming);
        assert!(m.expire(token));
    }

    #[test]
    fn state_names() {
        assert_eq!(CopyState::Idle.as_str(), "idle");
        assert_eq!(CopyState::Confirming.as_str(), "confirming");
    }
}
