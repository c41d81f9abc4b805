//! Colliding particles demo
//!
//! Equal-size, equal-mass particles bounce off the walls and off each other.
//! Particles near the pointer fill in; the rest fade back to outlines.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Viewport};
use super::collision::resolve_all;
use super::integrate::advance;
use super::spawn::{SpawnConfig, SpawnError, SpeedRange, create_bodies};
use crate::consts::*;

/// Tunables for the colliding particles demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollidingConfig {
    pub count: usize,
    pub radius: f32,
    pub mass: f32,
    /// Magnitude of each velocity component at spawn
    pub speed: f32,
    /// Pointer distance under which a particle fills in
    pub reveal_radius: f32,
    /// Opacity gained per frame near the pointer
    pub fade_in: f32,
    /// Opacity lost per frame elsewhere
    pub fade_out: f32,
    pub max_attempts: u32,
}

impl Default for CollidingConfig {
    fn default() -> Self {
        Self {
            count: COLLIDING_COUNT,
            radius: COLLIDING_RADIUS,
            mass: COLLIDING_MASS,
            speed: COLLIDING_SPEED,
            reveal_radius: POINTER_REVEAL_RADIUS,
            fade_in: OPACITY_FADE_IN,
            fade_out: OPACITY_FADE_OUT,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl CollidingConfig {
    pub fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            count: self.count,
            radius: self.radius,
            mass: self.mass,
            speed: SpeedRange::fixed(self.speed),
            max_attempts: self.max_attempts,
        }
    }
}

/// Per-particle display state (not physics)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Look {
    /// Palette index
    pub color: u32,
    /// Fill opacity, 0-1
    pub opacity: f32,
}

/// Colliding particles state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollidingParticles {
    pub config: CollidingConfig,
    pub viewport: Viewport,
    /// Physics bodies, in processing order
    pub bodies: Vec<Body>,
    /// Display state, parallel to `bodies`
    pub looks: Vec<Look>,
    /// Frames simulated so far
    pub frame: u64,
    /// Pairs resolved during the last frame
    pub last_collisions: usize,
}

impl CollidingParticles {
    pub fn new<R: Rng + ?Sized>(
        config: CollidingConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        let bodies = create_bodies(&config.spawn_config(), viewport, rng)?;
        let looks = bodies
            .iter()
            .map(|_| Look {
                color: rng.random_range(0..PALETTE_SIZE),
                opacity: 0.0,
            })
            .collect();

        log::info!(
            "Colliding particles: {} bodies of radius {} in {}x{}",
            config.count,
            config.radius,
            viewport.width,
            viewport.height
        );

        Ok(Self::from_parts(config, viewport, bodies, looks))
    }

    /// Assemble from already-built bodies (one look per body)
    pub fn from_parts(
        config: CollidingConfig,
        viewport: Viewport,
        bodies: Vec<Body>,
        looks: Vec<Look>,
    ) -> Self {
        debug_assert_eq!(bodies.len(), looks.len());
        Self {
            config,
            viewport,
            bodies,
            looks,
            frame: 0,
            last_collisions: 0,
        }
    }

    /// Advance one frame.
    ///
    /// Bodies are handled in list order: each one moves, then collides against
    /// the whole list, then updates its opacity from the pointer.
    pub fn frame(&mut self, pointer: Option<Vec2>) {
        let CollidingConfig {
            reveal_radius,
            fade_in,
            fade_out,
            ..
        } = self.config;
        let mut collisions = 0;
        for i in 0..self.bodies.len() {
            advance(&mut self.bodies[i]);
            collisions += resolve_all(i, &mut self.bodies);

            let position = self.bodies[i].position;
            let look = &mut self.looks[i];
            let near = pointer.is_some_and(|p| p.distance(position) < reveal_radius);
            look.opacity = if near {
                (look.opacity + fade_in).min(1.0)
            } else {
                (look.opacity - fade_out).max(0.0)
            };
        }

        self.frame += 1;
        self.last_collisions = collisions;
        if collisions > 0 {
            log::trace!("frame {}: {} collisions", self.frame, collisions);
        }
    }

    /// Recompute every body's bounds for a new viewport
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for body in &mut self.bodies {
            body.set_bounds(viewport);
        }
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
