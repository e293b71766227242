//! The idle-suppression loop.
//!
//! Each tick injects one [`SyntheticMove`], then waits up to the tick
//! interval for the message queue to wake it. Pending messages are drained
//! in full; a matching termination hotkey ends the loop after the current
//! tick. The OS is reached only through the three capability traits below,
//! so the loop runs against fakes in tests.

use std::time::Duration;

use thiserror::Error;

use super::event::SyntheticMove;
use super::state::{LoopPhase, LoopState, RunSummary};
use crate::config::{HotkeySpec, JigglerConfig};

/// Why an injection attempt did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
    /// The OS accepted fewer events than submitted (e.g. blocked by UIPI).
    #[error("OS injected {injected} of {requested} input events")]
    Rejected { requested: u32, injected: u32 },
}

/// Submits synthetic input to the OS.
pub trait InputInjector {
    /// Injects exactly one event.
    fn inject(&mut self, event: &SyntheticMove) -> Result<(), InjectError>;
}

/// Result of the single wait point in a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Timeout,
    MessagePending,
}

/// A message removed from the queue while draining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A registered global hotkey fired.
    Hotkey { id: i32 },
    /// Anything else; carries the raw message number.
    Other { message: u32 },
}

/// The calling thread's message queue.
pub trait MessagePump {
    /// Blocks until a message is queued or `timeout` elapses.
    fn wait_for_signal_or_timeout(&mut self, timeout: Duration) -> WaitOutcome;

    /// Removes every pending message without blocking.
    ///
    /// Implementations must translate and dispatch each message they remove
    /// so nothing is left unacknowledged.
    fn drain_pending(&mut self) -> Vec<Signal>;

    /// Extra-info value that injected events inherit.
    fn message_extra_info(&self) -> usize {
        0
    }
}

/// Registers and releases the global termination hotkey.
pub trait HotkeyRegistrar {
    /// Returns whether the OS accepted the registration.
    fn register(&mut self, hotkey: &HotkeySpec) -> bool;

    fn unregister(&mut self, id: i32);
}

/// Applies one drain pass to the loop state.
///
/// Every signal is looked at; a match does not cut the pass short.
pub fn apply_signals(state: &mut LoopState, hotkey_id: i32, signals: &[Signal]) {
    for signal in signals {
        match *signal {
            Signal::Hotkey { id } if id == hotkey_id => state.request_termination(),
            Signal::Hotkey { id } => tracing::debug!(id, "Ignoring foreign hotkey"),
            Signal::Other { .. } => {}
        }
    }
}

/// Owns the OS capabilities and the loop state for one run.
pub struct Jiggler<I, P, R> {
    injector: I,
    pump: P,
    registrar: R,
    config: JigglerConfig,
    state: LoopState,
    summary: RunSummary,
}

impl<I, P, R> Jiggler<I, P, R>
where
    I: InputInjector,
    P: MessagePump,
    R: HotkeyRegistrar,
{
    /// Attempts the hotkey registration and returns a loop ready to tick.
    ///
    /// A failed registration is not an error: the loop simply has no way
    /// to stop itself.
    pub fn start(config: JigglerConfig, injector: I, pump: P, mut registrar: R) -> Self {
        let hotkey_active = registrar.register(&config.hotkey);
        if hotkey_active {
            tracing::info!(
                hotkey = %config.hotkey,
                id = config.hotkey.id,
                "Termination hotkey registered"
            );
        } else {
            // Stays below the default filter: a missing hotkey is not reported.
            tracing::debug!(
                hotkey = %config.hotkey,
                "Termination hotkey unavailable, running until killed"
            );
        }

        Self {
            injector,
            pump,
            registrar,
            config,
            state: LoopState::new(hotkey_active),
            summary: RunSummary::new(hotkey_active),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Runs one inject-wait-drain cycle and reports the resulting phase.
    pub fn tick(&mut self) -> LoopPhase {
        if !self.state.running {
            return LoopPhase::Terminated;
        }

        let event = SyntheticMove::idle_nudge(self.pump.message_extra_info());
        match self.injector.inject(&event) {
            Ok(()) => self.summary.injected += 1,
            Err(e) => {
                self.summary.failed_injections += 1;
                tracing::debug!(error = %e, "Input injection failed");
            }
        }
        self.summary.ticks += 1;

        if self.pump.wait_for_signal_or_timeout(self.config.tick_interval)
            == WaitOutcome::MessagePending
        {
            let signals = self.pump.drain_pending();
            apply_signals(&mut self.state, self.config.hotkey.id, &signals);
        }

        let phase = self.state.phase();
        if phase == LoopPhase::Terminated {
            tracing::info!(ticks = self.summary.ticks, "Termination hotkey received");
        }
        phase
    }

    /// Ticks until terminated, then shuts down.
    ///
    /// Without a registered hotkey this never returns.
    pub fn run(mut self) -> RunSummary {
        tracing::info!(
            interval_ms = self.config.tick_interval.as_millis(),
            "Idle suppression loop started"
        );
        while self.tick() == LoopPhase::Running {}
        self.shutdown()
    }

    /// Releases the hotkey if, and only if, it was registered.
    pub fn shutdown(mut self) -> RunSummary {
        if self.state.hotkey_active {
            self.registrar.unregister(self.config.hotkey.id);
            tracing::info!(id = self.config.hotkey.id, "Termination hotkey released");
        }
        self.summary.final_phase = self.state.phase();
        self.summary
    }
}
