//! Synthetic input injection through `SendInput`.

use std::mem::size_of;

use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_MOVE, MOUSEINPUT,
};

use crate::jiggler::{InjectError, InputInjector, InputKind, MoveMode, SyntheticMove};

/// Converts a [`SyntheticMove`] into the raw `INPUT` record.
///
/// A relative move carries `MOUSEEVENTF_MOVE` alone. `MOUSEEVENTF_ABSOLUTE`
/// is only ever combined bitwise, and only for absolute moves.
pub fn to_raw_input(event: &SyntheticMove) -> INPUT {
    let InputKind::Mouse = event.kind;

    let flags = match event.mode {
        MoveMode::Relative => MOUSEEVENTF_MOVE,
        MoveMode::Absolute => MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE,
    };

    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: event.dx,
                dy: event.dy,
                mouseData: event.mouse_data,
                dwFlags: flags,
                time: event.time,
                dwExtraInfo: event.extra_info,
            },
        },
    }
}

/// Injects events into the system-wide input stream.
///
/// The injected move resets the OS idle timer exactly as hardware input
/// would.
#[derive(Debug, Default)]
pub struct SendInputInjector;

impl InputInjector for SendInputInjector {
    fn inject(&mut self, event: &SyntheticMove) -> Result<(), InjectError> {
        let inputs = [to_raw_input(event)];
        // SendInput returns how many events made it into the stream; 0 means
        // the call was blocked (typically by UIPI).
        let injected = unsafe { SendInput(&inputs, size_of::<INPUT>() as i32) };

        if injected as usize == inputs.len() {
            Ok(())
        } else {
            Err(InjectError::Rejected {
                requested: inputs.len() as u32,
                injected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_nudge_is_plain_relative_move() {
        let raw = to_raw_input(&SyntheticMove::idle_nudge(0x42));
        assert_eq!(raw.r#type, INPUT_MOUSE);

        let mi = unsafe { raw.Anonymous.mi };
        assert_eq!(mi.dx, 0);
        assert_eq!(mi.dy, 0);
        assert_eq!(mi.mouseData, 0);
        assert_eq!(mi.time, 0);
        assert_eq!(mi.dwExtraInfo, 0x42);
        assert_eq!(mi.dwFlags, MOUSEEVENTF_MOVE);
        assert_eq!((mi.dwFlags & MOUSEEVENTF_ABSOLUTE).0, 0);
    }

    #[test]
    fn test_absolute_move_combines_flags() {
        let event = SyntheticMove {
            mode: MoveMode::Absolute,
            ..SyntheticMove::idle_nudge(0)
        };
        let mi = unsafe { to_raw_input(&event).Anonymous.mi };
        assert_eq!(mi.dwFlags, MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE);
    }
}
