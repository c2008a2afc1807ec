//! The bouncing ball
//!
//! The ball only moves vertically, shuttling between two bounce boundaries:
//! `top = radius` and `bottom = paddle.y - radius`. It always heads for one of
//! them (`next_y`). Each frame it moves toward that target by a delta-scaled
//! step, clamped to the boundary; the frame after it arrives, the target swaps
//! to the other boundary. Frame rate therefore changes how smooth the motion
//! looks, never where the ball turns.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::entity::{Edge, Entity, Frame, GameEvent};
use super::player::Player;
use crate::config::GameConfig;
use crate::frame_step;

/// A ball bouncing between the top of the scene and the paddle line
#[derive(Debug)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// True while heading for the paddle
    down: bool,
    /// Pixels per second
    speed: f32,
    initial_speed: f32,
    score: u32,
    /// Boundary currently being approached
    next_y: f32,
    /// A stopped ball holds its position
    stopped: bool,
    player: Rc<RefCell<Player>>,
    color: String,
}

impl Ball {
    /// Ball resting on the paddle line, about to rise.
    ///
    /// Its speed is the height of its travel per second.
    pub fn new(config: &GameConfig, scene_width: f32, player: Rc<RefCell<Player>>) -> Self {
        let radius = config.ball_radius;
        let floor = player.borrow().y;
        let speed = floor - radius;
        Self {
            pos: Vec2::new(scene_width / 2.0 - radius, floor - radius),
            radius,
            down: false,
            speed,
            initial_speed: speed,
            score: 0,
            next_y: radius,
            stopped: false,
            player,
            color: config.foreground.clone(),
        }
    }

    /// Upper bounce boundary
    pub fn top(&self) -> f32 {
        self.radius
    }

    /// Lower bounce boundary, resting on the paddle line
    pub fn bottom(&self) -> f32 {
        self.player.borrow().y - self.radius
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn next_y(&self) -> f32 {
        self.next_y
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Always 0 - nothing awards points yet
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Freeze in place
    pub fn halt(&mut self) {
        self.stopped = true;
    }

    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Back to the starting speed
    pub fn reset(&mut self) {
        self.speed = self.initial_speed;
    }

    /// Whether the ball's horizontal extent overlaps the paddle
    fn over_paddle(&self) -> bool {
        let (left, right) = self.player.borrow().span();
        self.pos.x + self.radius >= left && self.pos.x - self.radius <= right
    }

    /// Move one frame toward the current target, or turn around if already there.
    pub fn advance(&mut self, delta: f64) -> Option<GameEvent> {
        if self.stopped {
            return None;
        }

        let step = frame_step(delta, self.speed);
        let (top, bottom) = (self.top(), self.bottom());
        let y = self.pos.y;

        if y < self.next_y {
            self.pos.y = bottom.min(y + step);
            (self.pos.y == bottom && y != bottom).then(|| GameEvent::Landed {
                on_paddle: self.over_paddle(),
            })
        } else if y > self.next_y {
            self.pos.y = top.max(y - step);
            None
        } else {
            let edge = if y == top { Edge::Top } else { Edge::Bottom };
            self.next_y = match edge {
                Edge::Top => bottom,
                Edge::Bottom => top,
            };
            self.down = edge == Edge::Top;
            Some(GameEvent::Bounced { edge })
        }
    }
}

impl Entity for Ball {
    fn draw(&mut self, delta: f64, frame: &mut Frame<'_>) {
        if let Some(event) = self.advance(delta) {
            frame.emit(event);
        }
        frame
            .surface
            .fill_circle(self.pos, self.radius, &self.color);
    }
}
