//! Windows message queue utilities.
//!
//! Provides the timed wait and the non-blocking drain used by the
//! idle-suppression loop. Unlike a `GetMessageW` pump this never blocks
//! longer than the requested timeout.

use std::time::Duration;

use windows::Win32::Foundation::{WAIT_OBJECT_0, WAIT_TIMEOUT};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageExtraInfo, MsgWaitForMultipleObjects, PeekMessageW,
    TranslateMessage, MSG, PM_REMOVE, QS_ALLINPUT, WM_HOTKEY,
};

use crate::jiggler::{MessagePump, Signal, WaitOutcome};

/// `INFINITE` is `u32::MAX`; a finite timeout must stay below it.
const MAX_FINITE_WAIT_MS: u32 = u32::MAX - 1;

/// Maps a raw message onto a [`Signal`].
pub fn classify(msg: &MSG) -> Signal {
    if msg.message == WM_HOTKEY {
        Signal::Hotkey {
            id: msg.wParam.0 as i32,
        }
    } else {
        Signal::Other {
            message: msg.message,
        }
    }
}

/// Message queue of the calling thread.
///
/// Must be used from the thread that registered the hotkey.
#[derive(Debug, Default)]
pub struct ThreadMessagePump;

impl MessagePump for ThreadMessagePump {
    fn wait_for_signal_or_timeout(&mut self, timeout: Duration) -> WaitOutcome {
        let millis = u32::try_from(timeout.as_millis())
            .unwrap_or(MAX_FINITE_WAIT_MS)
            .min(MAX_FINITE_WAIT_MS);

        // No handles: only the message queue can wake us early.
        let result = unsafe { MsgWaitForMultipleObjects(None, false, millis, QS_ALLINPUT) };

        if result == WAIT_OBJECT_0 {
            WaitOutcome::MessagePending
        } else {
            if result != WAIT_TIMEOUT {
                tracing::debug!(code = result.0, "Unexpected wait result, treating as timeout");
            }
            WaitOutcome::Timeout
        }
    }

    fn drain_pending(&mut self) -> Vec<Signal> {
        let mut signals = Vec::new();
        let mut msg = MSG::default();

        unsafe {
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                signals.push(classify(&msg));
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        if !signals.is_empty() {
            tracing::trace!(count = signals.len(), "Drained message queue");
        }
        signals
    }

    fn message_extra_info(&self) -> usize {
        unsafe { GetMessageExtraInfo() }.0 as usize
    }
}
