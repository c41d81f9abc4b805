//! Initial placement of a body set
//!
//! Positions are rejection-sampled until a body overlaps nothing placed before
//! it. The retry count per body is capped so a crowded viewport fails with an
//! error instead of spinning forever.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::body::{Body, Bounds, Viewport};
use super::collision::are_colliding;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::random_sign;

/// Inclusive range of per-axis speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Range holding a single speed
    pub fn fixed(speed: f32) -> Self {
        Self::new(speed, speed)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min >= 0.0 && self.min <= self.max
    }

    /// Uniform magnitude in the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..=self.max)
    }

    /// Uniform magnitude with a random sign
    pub fn sample_signed<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.sample(rng) * random_sign(rng)
    }
}

/// Parameters for [`create_bodies`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub count: usize,
    pub radius: f32,
    pub mass: f32,
    pub speed: SpeedRange,
    /// Placement attempts per body before giving up
    pub max_attempts: u32,
}

impl SpawnConfig {
    pub fn new(count: usize, radius: f32, mass: f32, speed: SpeedRange) -> Self {
        Self {
            count,
            radius,
            mass,
            speed,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Why a body set could not be built
#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    #[error("body radius {radius} and mass {mass} must both be positive")]
    InvalidBody { radius: f32, mass: f32 },
    #[error("speed range {min}..={max} is empty or negative")]
    InvalidSpeed { min: f32, max: f32 },
    #[error("viewport {width}x{height} cannot hold a body of radius {radius}")]
    ViewportTooSmall { width: f32, height: f32, radius: f32 },
    #[error("no free spot for body {placed} of {requested} after {attempts} attempts")]
    NoRoom {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}

/// Build `config.count` non-overlapping bodies with random positions and velocities
pub fn create_bodies<R: Rng + ?Sized>(
    config: &SpawnConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Result<Vec<Body>, SpawnError> {
    if !(config.radius > 0.0 && config.mass > 0.0) {
        return Err(SpawnError::InvalidBody {
            radius: config.radius,
            mass: config.mass,
        });
    }
    if !config.speed.is_valid() {
        return Err(SpawnError::InvalidSpeed {
            min: config.speed.min,
            max: config.speed.max,
        });
    }
    if !Bounds::inset(viewport, config.radius).is_valid() {
        return Err(SpawnError::ViewportTooSmall {
            width: viewport.width,
            height: viewport.height,
            radius: config.radius,
        });
    }

    let mut bodies: Vec<Body> = Vec::with_capacity(config.count);
    let mut total_attempts: u64 = 0;

    while bodies.len() < config.count {
        let velocity = Vec2::new(
            config.speed.sample_signed(rng),
            config.speed.sample_signed(rng),
        );
        let mut body = Body::new(config.radius, config.mass, viewport).with_velocity(velocity);

        let attempts = place(&mut body, &bodies, config.max_attempts, rng).ok_or_else(|| {
            SpawnError::NoRoom {
                placed: bodies.len(),
                requested: config.count,
                attempts: config.max_attempts,
            }
        })?;
        if attempts > config.max_attempts / 2 {
            log::warn!(
                "body {} took {} placement attempts (cap {})",
                bodies.len(),
                attempts,
                config.max_attempts
            );
        }
        total_attempts += u64::from(attempts);
        bodies.push(body);
    }

    log::debug!(
        "placed {} bodies in {} attempts",
        bodies.len(),
        total_attempts
    );
    Ok(bodies)
}

/// Resample `body` until it overlaps nothing in `placed`.
///
/// Returns the number of attempts used, or `None` once `max_attempts` is spent.
fn place<R: Rng + ?Sized>(
    body: &mut Body,
    placed: &[Body],
    max_attempts: u32,
    rng: &mut R,
) -> Option<u32> {
    for attempt in 1..=max_attempts {
        body.randomize_position(rng);
        if !placed.iter().any(|other| are_colliding(body, other)) {
            return Some(attempt);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_create_bodies_basic() {
        let mut rng = Pcg32::seed_from_u64(1);
        let config = SpawnConfig::new(50, 10.0, 1.0, SpeedRange::fixed(1.0));
        let viewport = Viewport::new(800.0, 600.0);
        let bodies = create_bodies(&config, viewport, &mut rng).unwrap();

        assert_eq!(bodies.len(), 50);
        for body in &bodies {
            assert_eq!(body.radius, 10.0);
            assert_eq!(body.mass, 1.0);
            assert_eq!(body.velocity.x.abs(), 1.0);
            assert_eq!(body.velocity.y.abs(), 1.0);
            assert!(body.bounds.contains(body.position));
        }
    }

    #[test]
    fn test_velocity_within_speed_range() {
        let mut rng = Pcg32::seed_from_u64(2);
        let config = SpawnConfig::new(40, 5.0, 1.0, SpeedRange::new(3.0, 10.0));
        let bodies = create_bodies(&config, Viewport::new(800.0, 600.0), &mut rng).unwrap();
        for body in &bodies {
            assert!((3.0..=10.0).contains(&body.velocity.x.abs()));
            assert!((3.0..=10.0).contains(&body.velocity.y.abs()));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = SpawnConfig::new(30, 10.0, 1.0, SpeedRange::fixed(1.0));
        let viewport = Viewport::new(640.0, 480.0);
        let a = create_bodies(&config, viewport, &mut Pcg32::seed_from_u64(9)).unwrap();
        let b = create_bodies(&config, viewport, &mut Pcg32::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_crowded_viewport_fails() {
        let mut rng = Pcg32::seed_from_u64(3);
        // Room for a handful of bodies at most
        let mut config = SpawnConfig::new(100, 10.0, 1.0, SpeedRange::fixed(1.0));
        config.max_attempts = 200;
        let err = create_bodies(&config, Viewport::new(60.0, 60.0), &mut rng).unwrap_err();
        match err {
            SpawnError::NoRoom {
                placed,
                requested,
                attempts,
            } => {
                assert!(placed > 0 && placed < 100);
                assert_eq!(requested, 100);
                assert_eq!(attempts, 200);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = Pcg32::seed_from_u64(4);
        let viewport = Viewport::new(100.0, 100.0);

        let config = SpawnConfig::new(1, 0.0, 1.0, SpeedRange::fixed(1.0));
        assert!(matches!(
            create_bodies(&config, viewport, &mut rng),
            Err(SpawnError::InvalidBody { .. })
        ));

        let config = SpawnConfig::new(1, 5.0, -1.0, SpeedRange::fixed(1.0));
        assert!(matches!(
            create_bodies(&config, viewport, &mut rng),
            Err(SpawnError::InvalidBody { .. })
        ));

        let config = SpawnConfig::new(1, 5.0, 1.0, SpeedRange::new(2.0, 1.0));
        assert!(matches!(
            create_bodies(&config, viewport, &mut rng),
            Err(SpawnError::InvalidSpeed { .. })
        ));

        let config = SpawnConfig::new(1, 60.0, 1.0, SpeedRange::fixed(1.0));
        assert_eq!(
            create_bodies(&config, viewport, &mut rng),
            Err(SpawnError::ViewportTooSmall {
                width: 100.0,
                height: 100.0,
                radius: 60.0
            })
        );
    }

    #[test]
    fn test_zero_count() {
        let mut rng = Pcg32::seed_from_u64(5);
        let config = SpawnConfig::new(0, 10.0, 1.0, SpeedRange::fixed(1.0));
        let bodies = create_bodies(&config, Viewport::new(100.0, 100.0), &mut rng).unwrap();
        assert!(bodies.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_placement_non_overlap(seed in any::<u64>(), count in 1usize..60, radius in 2.0f32..12.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let config = SpawnConfig::new(count, radius, 1.0, SpeedRange::fixed(1.0));
            let bodies = create_bodies(&config, Viewport::new(1024.0, 768.0), &mut rng).unwrap();

            for (i, a) in bodies.iter().enumerate() {
                for b in &bodies[i + 1..] {
                    prop_assert!(a.position.distance(b.position) >= a.radius + b.radius);
                }
            }
        }
    }
}
