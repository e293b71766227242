//! Global hotkey registration.
//!
//! Hotkeys are registered without a window, so `WM_HOTKEY` lands in the
//! message queue of the registering thread. That thread must be the one
//! running [`super::ThreadMessagePump`].

use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN,
};

use crate::config::{HotkeySpec, Modifiers};
use crate::jiggler::HotkeyRegistrar;

/// Maps [`Modifiers`] onto the `MOD_*` flags `RegisterHotKey` expects.
pub fn modifier_flags(modifiers: Modifiers) -> HOT_KEY_MODIFIERS {
    let mut flags = HOT_KEY_MODIFIERS(0);
    for (held, flag) in [
        (modifiers.ctrl, MOD_CONTROL),
        (modifiers.shift, MOD_SHIFT),
        (modifiers.alt, MOD_ALT),
        (modifiers.win, MOD_WIN),
    ] {
        if held {
            flags = flags | flag;
        }
    }
    flags
}

/// Registers hotkeys against the calling thread's message queue.
#[derive(Debug, Default)]
pub struct ThreadHotkeyRegistrar;

impl HotkeyRegistrar for ThreadHotkeyRegistrar {
    fn register(&mut self, hotkey: &HotkeySpec) -> bool {
        let Some(vk) = hotkey.virtual_key() else {
            tracing::debug!(key = %hotkey.key, "Hotkey key has no virtual-key code");
            return false;
        };

        let modifiers = modifier_flags(hotkey.modifiers);
        match unsafe { RegisterHotKey(None, hotkey.id, modifiers, vk) } {
            Ok(()) => true,
            Err(e) => {
                // Usually another process already owns the combination.
                tracing::debug!(id = hotkey.id, error = ?e, "RegisterHotKey failed");
                false
            }
        }
    }

    fn unregister(&mut self, id: i32) {
        if let Err(e) = unsafe { UnregisterHotKey(None, id) } {
            tracing::error!(id, error = ?e, "Failed to unregister hotkey");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shift_flags() {
        let flags = modifier_flags(Modifiers::CTRL_SHIFT);
        assert_eq!(flags, MOD_CONTROL | MOD_SHIFT);
    }

    #[test]
    fn test_no_modifiers() {
        assert_eq!(modifier_flags(Modifiers::default()), HOT_KEY_MODIFIERS(0));
    }

    #[test]
    fn test_register_rejects_unmappable_key() {
        let spec = HotkeySpec {
            key: '#',
            ..HotkeySpec::default()
        };
        assert!(!ThreadHotkeyRegistrar.register(&spec));
    }

    // Registering the real combination is left out: it is global state and
    // fails whenever another process holds Ctrl+Shift+Q.
}
