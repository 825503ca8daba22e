//! Canvas 2D backend (browser only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::DrawCmd;

/// Paints scene commands onto an HTML canvas, scaling arena units to pixels
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    scale: Vec2,
}

impl CanvasPainter {
    /// Grab the canvas' 2D context; `None` if the browser refuses one
    pub fn new(canvas: &HtmlCanvasElement, arena: Vec2) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let mut painter = Self {
            ctx,
            scale: Vec2::ONE,
        };
        painter.resize(canvas.width(), canvas.height(), arena);
        Some(painter)
    }

    /// Recompute the arena-to-pixel scale after the backing store changes
    pub fn resize(&mut self, width: u32, height: u32, arena: Vec2) {
        self.scale = Vec2::new(width as f32 / arena.x, height as f32 / arena.y);
    }

    pub fn paint(&self, cmds: &[DrawCmd]) {
        let ctx = &self.ctx;
        let s = self.scale;
        for cmd in cmds {
            match cmd {
                DrawCmd::Rect { pos, size, color } => {
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill_rect(
                        (pos.x * s.x) as f64,
                        (pos.y * s.y) as f64,
                        (size.x * s.x) as f64,
                        (size.y * s.y) as f64,
                    );
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&color.css());
                    ctx.begin_path();
                    let _ = ctx.arc(
                        (center.x * s.x) as f64,
                        (center.y * s.y) as f64,
                        (radius * s.x.min(s.y)) as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.close_path();
                    ctx.fill();
                }
                DrawCmd::Text {
                    text,
                    pos,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&color.css());
                    ctx.set_font(&format!("{}px monospace", (size * s.y).round()));
                    let _ = ctx.fill_text(text, (pos.x * s.x) as f64, (pos.y * s.y) as f64);
                }
            }
        }
    }
}
