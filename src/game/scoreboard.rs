//! Score and speed readout

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::ball::Ball;
use super::entity::{Entity, Frame};
use crate::config::GameConfig;
use crate::renderer::TextStyle;

/// Read-only view of the ball's score and speed, top-left corner
#[derive(Debug)]
pub struct ScoreBoard {
    ball: Rc<RefCell<Ball>>,
    speed_divisor: f32,
    font: String,
    color: String,
}

impl ScoreBoard {
    pub fn new(config: &GameConfig, ball: Rc<RefCell<Ball>>) -> Self {
        Self {
            ball,
            speed_divisor: config.speed_divisor,
            font: config.hud_font.clone(),
            color: config.hud_color.clone(),
        }
    }

    /// The two lines shown, speed first
    pub fn lines(&self) -> [String; 2] {
        let ball = self.ball.borrow();
        let speed = (ball.speed() / self.speed_divisor).round() as i64;
        [format!("Speed: {speed}"), format!("Score: {}", ball.score())]
    }
}

impl Entity for ScoreBoard {
    fn draw(&mut self, _delta: f64, frame: &mut Frame<'_>) {
        let style = TextStyle {
            font: &self.font,
            color: &self.color,
        };
        let [speed, score] = self.lines();
        frame.surface.fill_text(&speed, Vec2::new(10.0, 20.0), style);
        frame.surface.fill_text(&score, Vec2::new(10.0, 35.0), style);
    }
}
