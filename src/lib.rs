//! mouse-mv - keeps Windows awake.
//!
//! Injects a zero-displacement mouse move about once a second so the OS
//! idle, sleep and screen-lock timers never fire. Ctrl+Shift+Q stops it
//! when the hotkey could be registered.

pub mod config;
pub mod jiggler;
#[cfg(windows)]
pub mod winapi_utils;

use config::JigglerConfig;
use jiggler::RunSummary;

/// Runs the idle-suppression loop against the real OS on the calling thread.
///
/// Returns once the termination hotkey is pressed. If the hotkey could not
/// be registered this only returns when the process is killed.
#[cfg(windows)]
pub fn run_system(config: JigglerConfig) -> RunSummary {
    use jiggler::Jiggler;
    use winapi_utils::{SendInputInjector, ThreadHotkeyRegistrar, ThreadMessagePump};

    Jiggler::start(config, SendInputInjector, ThreadMessagePump, ThreadHotkeyRegistrar).run()
}

/// Non-Windows hosts have no input subsystem to drive; returns immediately.
#[cfg(not(windows))]
pub fn run_system(config: JigglerConfig) -> RunSummary {
    tracing::warn!(
        hotkey = %config.hotkey,
        "Idle suppression needs the Windows input subsystem, nothing to do"
    );
    let mut summary = RunSummary::new(false);
    summary.final_phase = jiggler::LoopPhase::Terminated;
    summary
}
