//! Loop state and the summary handed back when the loop ends.

use chrono::{DateTime, Local};

/// The two states of the idle-suppression loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    Terminated,
}

/// Mutable state owned by the loop for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopState {
    /// Set once from the registration result; read again only at shutdown.
    pub hotkey_active: bool,
    pub running: bool,
}

impl LoopState {
    pub fn new(hotkey_active: bool) -> Self {
        Self {
            hotkey_active,
            running: true,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        if self.running {
            LoopPhase::Running
        } else {
            LoopPhase::Terminated
        }
    }

    /// Handles the termination hotkey.
    ///
    /// Only takes effect when registration succeeded, so an unregistered
    /// process can never stop itself.
    pub fn request_termination(&mut self) {
        if self.hotkey_active {
            self.running = false;
        }
    }
}

/// What the loop did over its lifetime.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub hotkey_active: bool,
    pub ticks: u64,
    pub injected: u64,
    pub failed_injections: u64,
    pub final_phase: LoopPhase,
}

impl RunSummary {
    pub fn new(hotkey_active: bool) -> Self {
        Self {
            started_at: Local::now(),
            hotkey_active,
            ticks: 0,
            injected: 0,
            failed_injections: 0,
            final_phase: LoopPhase::Running,
        }
    }

    /// Whole seconds since the loop started.
    pub fn uptime_secs(&self) -> i64 {
        (Local::now() - self.started_at).num_seconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running() {
        assert_eq!(LoopState::new(true).phase(), LoopPhase::Running);
        assert_eq!(LoopState::new(false).phase(), LoopPhase::Running);
    }

    #[test]
    fn test_termination_requires_active_hotkey() {
        let mut state = LoopState::new(false);
        state.request_termination();
        assert!(state.running);
        assert_eq!(state.phase(), LoopPhase::Running);

        let mut state = LoopState::new(true);
        state.request_termination();
        assert!(!state.running);
        assert_eq!(state.phase(), LoopPhase::Terminated);
        assert!(state.hotkey_active);
    }

    #[test]
    fn test_summary_starts_empty() {
        let summary = RunSummary::new(true);
        assert!(summary.hotkey_active);
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.injected, 0);
        assert_eq!(summary.failed_injections, 0);
        assert_eq!(summary.final_phase, LoopPhase::Running);
        assert!(summary.uptime_secs() >= 0);
    }
}
