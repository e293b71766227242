//! Compile-time configuration.
//!
//! There is no runtime configuration surface: every value here is fixed at
//! build time and reached through `Default`.

use std::fmt;
use std::time::Duration;

/// Identifier reserved for the termination hotkey.
pub const TERMINATION_HOTKEY_ID: i32 = 1;

/// Upper bound on a single wait between injected events.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Modifier keys held together with the hotkey's main key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub win: bool,
}

impl Modifiers {
    /// Ctrl + Shift.
    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        alt: false,
        win: false,
    };
}

/// A global hotkey: reserved id, modifiers and a letter or digit key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeySpec {
    pub id: i32,
    pub modifiers: Modifiers,
    pub key: char,
}

impl HotkeySpec {
    /// Windows virtual-key code of the main key.
    ///
    /// Letters and digits map straight onto their uppercase ASCII value
    /// (`'A'` = 0x41, `'0'` = 0x30). Anything else has no code.
    pub fn virtual_key(&self) -> Option<u32> {
        if self.key.is_ascii_alphanumeric() {
            Some(self.key.to_ascii_uppercase() as u32)
        } else {
            None
        }
    }
}

impl Default for HotkeySpec {
    fn default() -> Self {
        Self {
            id: TERMINATION_HOTKEY_ID,
            modifiers: Modifiers::CTRL_SHIFT,
            key: 'Q',
        }
    }
}

impl fmt::Display for HotkeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (held, name) in [(m.ctrl, "Ctrl"), (m.shift, "Shift"), (m.alt, "Alt"), (m.win, "Win")] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

/// Settings for the idle-suppression loop.
#[derive(Debug, Clone)]
pub struct JigglerConfig {
    /// Longest wait between two injected events (default: 1000ms).
    pub tick_interval: Duration,

    /// Hotkey that requests termination (default: Ctrl+Shift+Q, id 1).
    pub hotkey: HotkeySpec,
}

impl Default for JigglerConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            hotkey: HotkeySpec::default(),
        }
    }
}
