//! Canvas 2D backend (wasm only)

use glam::Vec2;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

use super::{CircleStyle, Color, Renderer};

/// [`Renderer`] over a browser 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_background(&mut self, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: CircleStyle) {
        let ctx = &self.ctx;
        ctx.begin_path();
        // Negative radius throws IndexSizeError; nothing to draw then
        if ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        if let Some(stroke) = style.stroke {
            ctx.set_stroke_style_str(&stroke.css());
            ctx.stroke();
        }
        if let Some(fill) = style.fill {
            ctx.set_fill_style_str(&fill.css());
            ctx.save();
            ctx.set_global_alpha(style.fill_alpha as f64);
            ctx.fill();
            ctx.restore();
        }
    }

    fn segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(&color.css());
        ctx.set_line_width(width as f64);
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
        ctx.close_path();
    }

    fn polyline(&mut self, points: &[Vec2], color: Color) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for p in points {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.set_stroke_style_str(&color.css());
        ctx.stroke();
    }
}
