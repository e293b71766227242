//! Platform-independent idle-suppression core.
//!
//! This module holds the synthetic event, the loop state and the tick
//! logic. OS access goes through the traits in [`runner`].

pub mod event;
pub mod runner;
pub mod state;

pub use event::*;
pub use runner::*;
pub use state::*;
