//! Canvas Pong - a bouncing ball and a keyboard paddle on a 2D canvas
//!
//! Core modules:
//! - `game`: Entities, the per-frame draw loop and its events
//! - `renderer`: Drawing surfaces (browser canvas, headless recorder)
//! - `platform`: Frame timing and keyboard intent
//! - `config`: Data-driven sizes, colours and speeds

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;

pub use config::GameConfig;
pub use error::{ConfigError, InitError};
pub use game::{Entity, GameEvent, Stage};

/// Game configuration constants
pub mod consts {
    /// Milliseconds per second, the unit every delta is expressed in
    pub const MS_PER_SEC: f32 = 1000.0;

    /// Scene background
    pub const BACKGROUND_COLOR: &str = "#bada55";
    /// Paddle and ball fill
    pub const FOREGROUND_COLOR: &str = "black";
    /// Scoreboard and FPS text
    pub const HUD_COLOR: &str = "rgba(0,0,0,0.5)";
    pub const HUD_FONT: &str = "14px Arial black";

    /// Paddle defaults - width and speed scale with the canvas width
    pub const PADDLE_WIDTH_RATIO: f32 = 0.1;
    pub const PADDLE_SPEED_RATIO: f32 = 0.5;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the bottom of the canvas to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 15.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;

    /// Draw calls averaged per FPS readout
    pub const FPS_WINDOW: u32 = 15;
    /// Scoreboard shows ball speed divided by this
    pub const SPEED_DIVISOR: f32 = 20.0;
}

/// Pixels covered in one frame at `speed` px/s over `delta_ms`.
///
/// Always rounded up so any positive delta makes progress.
#[inline]
pub fn frame_step(delta_ms: f64, speed: f32) -> f32 {
    (delta_ms as f32 * (speed / consts::MS_PER_SEC)).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_step_rounds_up() {
        assert_eq!(frame_step(8.0, 250.0), 2.0);
        assert_eq!(frame_step(9.0, 250.0), 3.0);
        assert_eq!(frame_step(0.0, 500.0), 0.0);
    }
}
