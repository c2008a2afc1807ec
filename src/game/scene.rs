//! Static background

use glam::Vec2;

use super::entity::{Entity, Frame};

/// Solid rectangle painted first each frame, clearing the previous one
#[derive(Debug, Clone)]
pub struct Scene {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: String,
}

impl Scene {
    pub fn new(pos: Vec2, size: Vec2, color: impl Into<String>) -> Self {
        Self {
            pos,
            size,
            color: color.into(),
        }
    }
}

impl Entity for Scene {
    fn draw(&mut self, _delta: f64, frame: &mut Frame<'_>) {
        frame.surface.fill_rect(self.pos, self.size, &self.color);
    }
}
