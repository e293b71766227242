//! The synthetic pointer event injected on every tick.

/// Kind of input record handed to the injection facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Mouse,
}

/// How the pointer coordinates of a move are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// `dx`/`dy` are deltas from the current position.
    Relative,
    /// `dx`/`dy` are normalized screen coordinates.
    Absolute,
}

/// A single pointer-move record.
///
/// Built fresh for each tick and dropped once submitted. The idle timer
/// treats it exactly like hardware input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticMove {
    pub kind: InputKind,
    pub dx: i32,
    pub dy: i32,
    pub mouse_data: u32,
    pub mode: MoveMode,
    /// 0 lets the OS stamp the event itself.
    pub time: u32,
    /// Copied from the calling thread's message extra-info value.
    pub extra_info: usize,
}

impl SyntheticMove {
    /// A relative move of (0, 0): resets idle timers, leaves the cursor alone.
    pub fn idle_nudge(extra_info: usize) -> Self {
        Self {
            kind: InputKind::Mouse,
            dx: 0,
            dy: 0,
            mouse_data: 0,
            mode: MoveMode::Relative,
            time: 0,
            extra_info,
        }
    }

    /// Whether submitting this event leaves the cursor where it is.
    pub fn is_stationary(&self) -> bool {
        self.mode == MoveMode::Relative && self.dx == 0 && self.dy == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_nudge_is_zero_relative_move() {
        let event = SyntheticMove::idle_nudge(0);
        assert_eq!(event.kind, InputKind::Mouse);
        assert_eq!(event.dx, 0);
        assert_eq!(event.dy, 0);
        assert_eq!(event.mouse_data, 0);
        assert_eq!(event.mode, MoveMode::Relative);
        assert_eq!(event.time, 0);
        assert!(event.is_stationary());
    }

    #[test]
    fn test_idle_nudge_carries_extra_info() {
        assert_eq!(SyntheticMove::idle_nudge(0xFF51_5151).extra_info, 0xFF51_5151);
    }

    #[test]
    fn test_absolute_origin_is_not_stationary() {
        // Absolute (0, 0) would warp the cursor to the top-left corner.
        let event = SyntheticMove {
            mode: MoveMode::Absolute,
            ..SyntheticMove::idle_nudge(0)
        };
        assert!(!event.is_stationary());
    }
}
