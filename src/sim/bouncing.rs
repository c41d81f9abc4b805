//! Bouncing circles demo
//!
//! A few large circles of assorted sizes bounce around the walls. They pass
//! through each other; there is no collision between circles.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds, Viewport};
use super::integrate::advance;
use super::spawn::{SpawnError, SpeedRange};
use crate::consts::*;

/// Tunables for the bouncing circles demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BouncingConfig {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub speed: SpeedRange,
}

impl Default for BouncingConfig {
    fn default() -> Self {
        Self {
            count: BOUNCING_COUNT,
            min_radius: BOUNCING_MIN_RADIUS,
            max_radius: BOUNCING_MAX_RADIUS,
            speed: SpeedRange::new(BOUNCING_MIN_SPEED, BOUNCING_MAX_SPEED),
        }
    }
}

/// Bouncing circles state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouncingCircles {
    pub viewport: Viewport,
    pub bodies: Vec<Body>,
    /// Palette index per body
    pub colors: Vec<u32>,
}

impl BouncingCircles {
    pub fn new<R: Rng + ?Sized>(
        config: &BouncingConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        if !(config.min_radius > 0.0 && config.min_radius <= config.max_radius) {
            return Err(SpawnError::InvalidBody {
                radius: config.min_radius,
                mass: 1.0,
            });
        }
        if !config.speed.is_valid() {
            return Err(SpawnError::InvalidSpeed {
                min: config.speed.min,
                max: config.speed.max,
            });
        }
        if !Bounds::inset(viewport, config.max_radius).is_valid() {
            return Err(SpawnError::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
                radius: config.max_radius,
            });
        }

        let mut bodies = Vec::with_capacity(config.count);
        let mut colors = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let radius = rng.random_range(config.min_radius..=config.max_radius);
            // Horizontal direction is random, every circle starts out falling
            let velocity = Vec2::new(config.speed.sample_signed(rng), config.speed.sample(rng));
            let mut body = Body::new(radius, 1.0, viewport).with_velocity(velocity);
            body.randomize_position(rng);
            bodies.push(body);
            colors.push(rng.random_range(0..PALETTE_SIZE));
        }

        log::info!("Bouncing circles: {} circles", bodies.len());
        Ok(Self {
            viewport,
            bodies,
            colors,
        })
    }

    pub fn frame(&mut self) {
        for body in &mut self.bodies {
            advance(body);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for body in &mut self.bodies {
            body.set_bounds(viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        let demo = BouncingCircles::new(&BouncingConfig::default(), Viewport::new(1280.0, 720.0), &mut rng)
            .unwrap();

        assert_eq!(demo.bodies.len(), BOUNCING_COUNT);
        for body in &demo.bodies {
            assert!((20.0..=40.0).contains(&body.radius));
            assert!((3.0..=10.0).contains(&body.velocity.x.abs()));
            assert!((3.0..=10.0).contains(&body.velocity.y));
            assert!(body.bounds.contains(body.position));
        }
    }

    #[test]
    fn test_circles_stay_near_viewport() {
        let mut rng = Pcg32::seed_from_u64(8);
        let viewport = Viewport::new(640.0, 480.0);
        let mut demo = BouncingCircles::new(&BouncingConfig::default(), viewport, &mut rng).unwrap();

        for _ in 0..1000 {
            demo.frame();
        }
        // Overshoot is at most one frame's travel past a bound
        for body in &demo.bodies {
            assert!(body.position.x >= body.bounds.x.lower - 10.0);
            assert!(body.position.x <= body.bounds.x.upper + 10.0);
            assert!(body.position.y >= body.bounds.y.lower - 10.0);
            assert!(body.position.y <= body.bounds.y.upper + 10.0);
        }
    }

    #[test]
    fn test_viewport_too_small() {
        let mut rng = Pcg32::seed_from_u64(1);
        let err = BouncingCircles::new(&BouncingConfig::default(), Viewport::new(50.0, 480.0), &mut rng)
            .unwrap_err();
        assert!(matches!(err, SpawnError::ViewportTooSmall { .. }));
    }
}
