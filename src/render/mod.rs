//! Rendering seam
//!
//! The simulation never draws. A host hands a [`Renderer`] to
//! [`scene::draw`], which reads the demo state and issues primitive calls.
//! On the web the renderer is a Canvas 2D context ([`canvas::CanvasRenderer`]).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;

/// A CSS color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Named(&'static str),
    Rgba(u8, u8, u8, f32),
    /// Hue in degrees, saturation and lightness in percent, alpha 0-1
    Hsla(f32, f32, f32, f32),
}

impl Color {
    /// CSS color string
    pub fn css(&self) -> String {
        match *self {
            Color::Named(name) => name.to_string(),
            Color::Rgba(r, g, b, a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla(h, s, l, a) => format!("hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

/// How to paint a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    /// Opacity applied to the fill only
    pub fill_alpha: f32,
}

impl CircleStyle {
    pub fn filled(color: Color) -> Self {
        Self {
            stroke: None,
            fill: Some(color),
            fill_alpha: 1.0,
        }
    }
}

/// Primitive drawing operations a host must provide
pub trait Renderer {
    /// Erase the whole canvas
    fn clear(&mut self, width: f32, height: f32);
    /// Paint a rectangle over the whole canvas
    fn fill_background(&mut self, width: f32, height: f32, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, style: CircleStyle);
    fn segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn polyline(&mut self, points: &[Vec2], color: Color);
}
