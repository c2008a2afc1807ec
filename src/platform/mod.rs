//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (delta between animation callbacks)
//! - Keyboard input, reduced to paddle actions

pub mod input;
pub mod time;

pub use input::{Action, InputState};
pub use time::Clock;
