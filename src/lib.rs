//! Canvas Experiments - small animation demos for a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (bodies, walls, elastic collisions, demos)
//! - `demo`: One enum over every demo, driven once per animation frame
//! - `render`: Renderer seam, scene painting, Canvas 2D backend (wasm only)
//! - `settings`: Data-driven demo configuration

pub mod demo;
pub mod render;
pub mod settings;
pub mod sim;

pub use demo::{Demo, DemoKind, FrameInput};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Demo configuration constants
pub mod consts {
    /// Placement attempts per body before construction gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
    /// Colors per demo palette
    pub const PALETTE_SIZE: u32 = 3;

    /// Colliding particles
    pub const COLLIDING_COUNT: usize = 350;
    pub const COLLIDING_RADIUS: f32 = 10.0;
    pub const COLLIDING_MASS: f32 = 1.0;
    pub const COLLIDING_SPEED: f32 = 1.0;
    /// Pointer distance under which a particle fills in
    pub const POINTER_REVEAL_RADIUS: f32 = 150.0;
    pub const OPACITY_FADE_IN: f32 = 0.1;
    pub const OPACITY_FADE_OUT: f32 = 0.02;

    /// Bouncing circles
    pub const BOUNCING_COUNT: usize = 10;
    pub const BOUNCING_MIN_RADIUS: f32 = 20.0;
    pub const BOUNCING_MAX_RADIUS: f32 = 40.0;
    pub const BOUNCING_MIN_SPEED: f32 = 3.0;
    pub const BOUNCING_MAX_SPEED: f32 = 10.0;

    /// Interactive balls
    pub const INTERACTIVE_COUNT: usize = 500;
    pub const INTERACTIVE_BASE_RADIUS: f32 = 5.0;
    pub const INTERACTIVE_MIN_SPEED: f32 = 0.05;
    pub const INTERACTIVE_MAX_SPEED: f32 = 0.1;
    /// Distance scale of the pointer swell
    pub const INTERACTIVE_FALLOFF: f32 = 500.0;
    /// Clamp on the scaled distance (caps the swell near the pointer)
    pub const INTERACTIVE_MIN_FALLOFF: f32 = 0.15;

    /// Circular motion
    pub const ORBIT_COUNT: usize = 50;
    /// Angle gained per frame is rotation_speed * ORBIT_ANGLE_STEP
    pub const ORBIT_ANGLE_STEP: f32 = 0.03;

    /// Sine waves
    pub const WAVE_AMPLITUDE: f32 = 150.0;
    pub const WAVE_LENGTH: f32 = 50.0;
    pub const WAVE_FREQUENCY: f32 = 1.0;
    pub const WAVE_TRAIL: u32 = 15;
    pub const WAVE_TRAIL_GAP: f32 = 15.0;
    pub const WAVE_HUE_STEP: f32 = 0.2;
}

/// Random +1.0 / -1.0 with equal odds
#[inline]
pub fn random_sign<R: rand::Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Point on a circle around `center`, angle 0 at the top, clockwise on screen
#[inline]
pub fn orbit_point(center: Vec2, distance: f32, theta: f32) -> Vec2 {
    Vec2::new(
        center.x + distance * theta.sin(),
        center.y - distance * theta.cos(),
    )
}
