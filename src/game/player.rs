//! The player's paddle

use glam::Vec2;

use super::entity::{Entity, Frame};
use crate::config::GameConfig;
use crate::frame_step;
use crate::platform::Action;

/// Horizontal paddle along the bottom of the scene.
///
/// Keyboard actions set a target x; each frame the paddle slides toward it at
/// a fixed speed without ever passing it.
#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge, always within `[0, max_x]`
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per second
    speed: f32,
    initial_x: f32,
    /// Target left edge
    next_x: f32,
    max_x: f32,
    color: String,
}

impl Player {
    /// Paddle centred horizontally for a scene of the given size
    pub fn new(config: &GameConfig, scene_width: f32, scene_height: f32) -> Self {
        let width = config.paddle_width(scene_width);
        let initial_x = scene_width / 2.0 - width / 2.0;
        Self {
            x: initial_x,
            y: config.paddle_y(scene_height),
            width,
            height: config.paddle_height,
            speed: config.paddle_speed(scene_width),
            initial_x,
            next_x: initial_x,
            max_x: (scene_width - width).max(0.0),
            color: config.foreground.clone(),
        }
    }

    /// Where the paddle is heading
    pub fn next_x(&self) -> f32 {
        self.next_x
    }

    /// Rightmost allowed left edge
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Left and right edges
    pub fn span(&self) -> (f32, f32) {
        (self.x, self.x + self.width)
    }

    /// Retarget from a keyboard action
    pub fn steer(&mut self, action: Action) {
        self.next_x = match action {
            Action::MoveLeft => 0.0,
            Action::MoveRight => self.max_x,
            Action::Stop => self.x,
        };
        log::trace!("Paddle {:?}: x={} -> {}", action, self.x, self.next_x);
    }

    /// Slide toward the target by at most one frame's worth of movement
    pub fn advance(&mut self, delta: f64) {
        let step = frame_step(delta, self.speed);
        if self.x < self.next_x {
            self.x = self.next_x.min(self.x + step);
        } else if self.x > self.next_x {
            self.x = self.next_x.max(self.x - step);
        }
    }

    /// Back to the centre, standing still
    pub fn reset(&mut self) {
        self.x = self.initial_x;
        self.next_x = self.initial_x;
    }
}

impl Entity for Player {
    fn draw(&mut self, delta: f64, frame: &mut Frame<'_>) {
        if let Some(action) = frame.input.poll() {
            self.steer(action);
        }
        self.advance(delta);

        frame.surface.fill_rect(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
            &self.color,
        );
    }
}
