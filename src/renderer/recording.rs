//! Headless surface that records draw calls
//!
//! Used by the native binary and by tests to inspect what a frame drew.

use glam::Vec2;

use super::{Surface, TextStyle};

/// Width of one character when measuring text without a real font
pub const CHAR_ADVANCE: f32 = 8.0;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        color: String,
    },
}

/// Surface that keeps every draw call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn since the last [`take`](Self::take)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands (call between frames)
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle<'_>) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: style.font.to_string(),
            color: style.color.to_string(),
        });
    }

    fn measure_text(&mut self, text: &str, _font: &str) -> f32 {
        text.chars().count() as f32 * CHAR_ADVANCE
    }
}
