//! Browser 2D canvas surface

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextStyle};
use crate::error::InitError;

/// A canvas sized for the display's pixel ratio
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Drawable size in CSS pixels
    pub size: (u32, u32),
}

impl CanvasSurface {
    /// Size the backing store to `client size × dpr` and scale the context so
    /// callers keep drawing in CSS pixels.
    pub fn attach(canvas: &HtmlCanvasElement, dpr: f64) -> Result<Self, InitError> {
        let client_w = canvas.client_width().max(0) as u32;
        let client_h = canvas.client_height().max(0) as u32;
        if client_w == 0 || client_h == 0 {
            return Err(InitError::ZeroSizedCanvas {
                width: client_w,
                height: client_h,
            });
        }

        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        canvas.set_width((client_w as f64 * dpr) as u32);
        canvas.set_height((client_h as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(InitError::NoContext)?
            .dyn_into()
            .map_err(|_| InitError::NoContext)?;
        ctx.scale(dpr, dpr).map_err(|_| InitError::NoContext)?;

        log::info!(
            "Canvas {}x{} css px at dpr {} ({}x{} device px)",
            client_w,
            client_h,
            dpr,
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            ctx,
            size: (client_w, client_h),
        })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color);
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle<'_>) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }

    fn measure_text(&mut self, text: &str, font: &str) -> f32 {
        self.ctx.set_font(font);
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }
}
