//! Circular motion demo
//!
//! Particles circle a shared center that eases toward the pointer. Each frame
//! a particle leaves a short segment from its previous point, and the painter
//! washes the canvas with translucent white so the segments fade into trails.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::body::Viewport;
use crate::consts::*;
use crate::orbit_point;

/// Tunables for the circular motion demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub count: usize,
    /// Stroke width range
    pub line_width: (f32, f32),
    pub rotation_speed: (f32, f32),
    /// Fraction of the gap to the target the center closes each frame
    pub follow_speed: (f32, f32),
    pub distance: (f32, f32),
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            count: ORBIT_COUNT,
            line_width: (1.5, 3.0),
            rotation_speed: (0.5, 1.0),
            follow_speed: (0.015, 0.05),
            distance: (100.0, 200.0),
        }
    }
}

/// A particle circling its own (lagging) center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitParticle {
    pub position: Vec2,
    pub previous: Vec2,
    pub center: Vec2,
    /// Current angle, 0 at the top
    pub theta: f32,
    pub rotation_speed: f32,
    pub follow_speed: f32,
    pub distance: f32,
    pub line_width: f32,
    /// Palette index
    pub color: u32,
}

impl OrbitParticle {
    pub fn frame(&mut self, pointer: Option<Vec2>) {
        self.previous = self.position;
        self.theta += self.rotation_speed * ORBIT_ANGLE_STEP;

        let target = pointer.unwrap_or(self.center);
        self.center += (target - self.center) * self.follow_speed;
        self.position = orbit_point(self.center, self.distance, self.theta);
    }
}

/// Circular motion state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularMotion {
    pub viewport: Viewport,
    pub particles: Vec<OrbitParticle>,
}

impl CircularMotion {
    pub fn new<R: Rng + ?Sized>(config: &OrbitConfig, viewport: Viewport, rng: &mut R) -> Self {
        let center = viewport.center();
        let particles = (0..config.count)
            .map(|_| {
                let theta = rng.random_range(0.0..TAU);
                let distance = sample(rng, config.distance);
                let position = orbit_point(center, distance, theta);
                OrbitParticle {
                    position,
                    previous: position,
                    center,
                    theta,
                    rotation_speed: sample(rng, config.rotation_speed),
                    follow_speed: sample(rng, config.follow_speed),
                    distance,
                    line_width: sample(rng, config.line_width),
                    color: rng.random_range(0..PALETTE_SIZE),
                }
            })
            .collect::<Vec<_>>();

        log::info!("Circular motion: {} particles", particles.len());
        Self {
            viewport,
            particles,
        }
    }

    pub fn frame(&mut self, pointer: Option<Vec2>) {
        for particle in &mut self.particles {
            particle.frame(pointer);
        }
    }

    /// Centers keep easing from wherever they are; only the size is recorded
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn particle() -> OrbitParticle {
        let center = Vec2::new(400.0, 300.0);
        OrbitParticle {
            position: orbit_point(center, 100.0, 0.0),
            previous: Vec2::ZERO,
            center,
            theta: 0.0,
            rotation_speed: 1.0,
            follow_speed: 0.05,
            distance: 100.0,
            line_width: 2.0,
            color: 0,
        }
    }

    #[test]
    fn test_particles_start_on_orbit() {
        let mut rng = Pcg32::seed_from_u64(21);
        let viewport = Viewport::new(800.0, 600.0);
        let demo = CircularMotion::new(&OrbitConfig::default(), viewport, &mut rng);

        assert_eq!(demo.particles.len(), ORBIT_COUNT);
        for p in &demo.particles {
            assert_eq!(p.center, viewport.center());
            let d = p.position.distance(p.center);
            assert!((d - p.distance).abs() < 1e-3);
            assert!((100.0..200.0).contains(&p.distance));
            assert!((1.5..3.0).contains(&p.line_width));
        }
    }

    #[test]
    fn test_frame_without_pointer_keeps_center() {
        let mut p = particle();
        let start = p.position;
        p.frame(None);

        assert_eq!(p.previous, start);
        assert_eq!(p.center, Vec2::new(400.0, 300.0));
        assert!((p.theta - 0.03).abs() < 1e-6);
        assert!((p.position.distance(p.center) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_center_eases_toward_pointer() {
        let mut p = particle();
        let pointer = Vec2::new(500.0, 300.0);
        p.frame(Some(pointer));
        assert!((p.center - Vec2::new(405.0, 300.0)).length() < 1e-4);

        for _ in 0..500 {
            p.frame(Some(pointer));
        }
        assert!(p.center.distance(pointer) < 0.01);
    }
}
