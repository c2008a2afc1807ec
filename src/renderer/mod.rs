//! Drawing surfaces
//!
//! Entities draw through the [`Surface`] trait so the same frame code runs
//! against the browser canvas and against a headless recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

/// Font and fill for a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle<'a> {
    pub font: &'a str,
    pub color: &'a str,
}

/// The handful of 2D primitives the game needs.
///
/// Coordinates are CSS pixels with the origin at the top-left corner; any
/// device pixel ratio scaling is the surface's business.
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    /// Draw text with its baseline starting at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle<'_>);

    /// Width the text would occupy in the given font
    fn measure_text(&mut self, text: &str, font: &str) -> f32;
}
