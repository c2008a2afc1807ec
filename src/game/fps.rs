//! Frames-per-second overlay

use glam::Vec2;

use super::entity::{Entity, Frame};
use crate::config::GameConfig;
use crate::consts::MS_PER_SEC;
use crate::renderer::TextStyle;

/// Windowed FPS average, top-right corner.
///
/// Instantaneous rates are summed over `window` draws; at the end of each
/// window the sum is snapshotted and the readout shows its average until the
/// next window closes.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    sum: f64,
    prev_sum: f64,
    count: u64,
    window: u32,
    scene_width: f32,
    font: String,
    color: String,
}

impl FpsCounter {
    pub fn new(config: &GameConfig, scene_width: f32) -> Self {
        Self {
            sum: 0.0,
            prev_sum: 0.0,
            count: 0,
            window: config.fps_window.max(1),
            scene_width,
            font: config.hud_font.clone(),
            color: config.hud_color.clone(),
        }
    }

    /// Add one frame's sample; returns true when a window just closed
    pub fn record(&mut self, delta: f64) -> bool {
        // Zero deltas (duplicate timestamps) still count toward the window
        if delta > 0.0 {
            self.sum += MS_PER_SEC as f64 / delta;
        }
        self.count += 1;
        if self.count % self.window as u64 == 0 {
            self.prev_sum = self.sum;
            self.sum = 0.0;
            true
        } else {
            false
        }
    }

    /// Average over the last completed window, 0 before the first one
    pub fn fps(&self) -> f64 {
        self.prev_sum / self.window as f64
    }

    pub fn label(&self) -> String {
        format!("FPS -> {:.2}", self.fps())
    }
}

impl Entity for FpsCounter {
    fn draw(&mut self, delta: f64, frame: &mut Frame<'_>) {
        if self.record(delta) {
            log::trace!("fps {:.2}", self.fps());
        }

        let text = self.label();
        let width = frame.surface.measure_text(&text, &self.font);
        frame.surface.fill_text(
            &text,
            Vec2::new(self.scene_width - width - 10.0, 15.0),
            TextStyle {
                font: &self.font,
                color: &self.color,
            },
        );
    }
}
