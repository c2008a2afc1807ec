//! Game configuration
//!
//! Every size, colour and speed the game uses, with defaults matching the
//! classic look. Can be overridden from a `data-config` JSON attribute on the
//! canvas element; nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Colours ===
    /// Scene fill
    pub background: String,
    /// Paddle and ball fill
    pub foreground: String,
    /// Scoreboard and FPS text
    pub hud_color: String,
    pub hud_font: String,

    // === Paddle ===
    /// Paddle width as a fraction of the scene width
    pub paddle_width_ratio: f32,
    pub paddle_height: f32,
    /// Paddle top edge sits this far above the bottom of the scene
    pub paddle_bottom_offset: f32,
    /// Paddle speed (px/s) as a fraction of the scene width
    pub paddle_speed_ratio: f32,

    // === Ball ===
    pub ball_radius: f32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Draw calls per FPS readout
    pub fps_window: u32,
    /// Scoreboard shows ball speed divided by this
    pub speed_divisor: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR.to_string(),
            foreground: FOREGROUND_COLOR.to_string(),
            hud_color: HUD_COLOR.to_string(),
            hud_font: HUD_FONT.to_string(),

            paddle_width_ratio: PADDLE_WIDTH_RATIO,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed_ratio: PADDLE_SPEED_RATIO,

            ball_radius: BALL_RADIUS,

            show_fps: true,
            fps_window: FPS_WINDOW,
            speed_divisor: SPEED_DIVISOR,
        }
    }
}

impl GameConfig {
    /// Canvas attribute holding an optional JSON override
    pub const ATTRIBUTE: &'static str = "data-config";

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that do not depend on the scene size
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio_ok = |r: f32| r > 0.0 && r <= 1.0;

        if !ratio_ok(self.paddle_width_ratio) {
            return Err(ConfigError::Invalid("paddle_width_ratio must be in (0, 1]"));
        }
        if !ratio_ok(self.paddle_speed_ratio) {
            return Err(ConfigError::Invalid("paddle_speed_ratio must be in (0, 1]"));
        }
        if !(self.paddle_height > 0.0) {
            return Err(ConfigError::Invalid("paddle_height must be positive"));
        }
        if !(self.paddle_bottom_offset >= 0.0) {
            return Err(ConfigError::Invalid("paddle_bottom_offset must not be negative"));
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::Invalid("ball_radius must be positive"));
        }
        if self.fps_window == 0 {
            return Err(ConfigError::Invalid("fps_window must be at least 1"));
        }
        if !(self.speed_divisor > 0.0) {
            return Err(ConfigError::Invalid("speed_divisor must be positive"));
        }
        Ok(())
    }

    /// Check that a scene of this size leaves the ball room to bounce
    pub fn validate_for(&self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.validate()?;
        if self.paddle_y(height) <= 2.0 * self.ball_radius {
            return Err(ConfigError::Invalid("scene too short for the ball to bounce"));
        }
        if width < 2.0 * self.ball_radius {
            return Err(ConfigError::Invalid("scene too narrow for the ball"));
        }
        Ok(())
    }

    pub fn paddle_width(&self, scene_width: f32) -> f32 {
        scene_width * self.paddle_width_ratio
    }

    /// Paddle speed in px/s
    pub fn paddle_speed(&self, scene_width: f32) -> f32 {
        scene_width * self.paddle_speed_ratio
    }

    /// The paddle's top edge, also the ball's floor
    pub fn paddle_y(&self, scene_height: f32) -> f32 {
        scene_height - self.paddle_bottom_offset
    }

    /// Load config from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Self {
        match canvas.get_attribute(Self::ATTRIBUTE) {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", Self::ATTRIBUTE);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", Self::ATTRIBUTE, e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }
}
