//! Circular bodies and the rectangles that hold them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Drawable area the bodies live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Closed interval a coordinate should stay within
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisBounds {
    pub lower: f32,
    pub upper: f32,
}

impl AxisBounds {
    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.lower && v <= self.upper
    }

    /// True when the interval is non-empty
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lower <= self.upper
    }
}

/// Axis-aligned rectangle constraining a body's center
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl Bounds {
    /// Viewport shrunk by `radius` on every side
    pub fn inset(viewport: Viewport, radius: f32) -> Self {
        Self {
            x: AxisBounds {
                lower: radius,
                upper: viewport.width - radius,
            },
            y: AxisBounds {
                lower: radius,
                upper: viewport.height - radius,
            },
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }
}

/// A simulated circular particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    /// Distance per frame
    pub velocity: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub bounds: Bounds,
}

impl Body {
    /// Body at rest at the origin, bounded by `viewport`
    pub fn new(radius: f32, mass: f32, viewport: Viewport) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        debug_assert!(mass > 0.0, "body mass must be positive");
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius,
            mass,
            bounds: Bounds::inset(viewport, radius),
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Recompute bounds for a new viewport.
    ///
    /// Position and velocity are left alone, so the body may sit outside its
    /// new bounds until the next integration step turns it around.
    pub fn set_bounds(&mut self, viewport: Viewport) {
        self.bounds = Bounds::inset(viewport, self.radius);
    }

    /// Resample the position uniformly within the current bounds.
    ///
    /// Bounds must be valid (see [`Bounds::is_valid`]).
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = Vec2::new(
            rng.random_range(self.bounds.x.lower..=self.bounds.x.upper),
            rng.random_range(self.bounds.y.lower..=self.bounds.y.upper),
        );
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
