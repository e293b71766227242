//! Safe wrappers around Windows API calls.
//!
//! Each submodule backs one of the loop's capability traits: input
//! injection, hotkey registration and the thread message queue.

pub mod hotkey;
pub mod input;
pub mod message_loop;

pub use hotkey::*;
pub use input::*;
pub use message_loop::*;
