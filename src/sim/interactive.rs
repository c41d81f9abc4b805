//! Interactive balls demo
//!
//! Many small balls that swell as the pointer approaches. A ball only drifts
//! while it is swollen: its step is its velocity scaled by how far its radius
//! has grown past the base radius.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds, Viewport};
use super::integrate::reflect_at_bounds;
use super::spawn::{SpawnError, SpeedRange};
use crate::consts::*;

/// Tunables for the interactive balls demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveConfig {
    pub count: usize,
    pub base_radius: f32,
    pub speed: SpeedRange,
    /// Distance scale of the swell
    pub falloff: f32,
    /// Lower clamp on the scaled distance
    pub min_falloff: f32,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            count: INTERACTIVE_COUNT,
            base_radius: INTERACTIVE_BASE_RADIUS,
            speed: SpeedRange::new(INTERACTIVE_MIN_SPEED, INTERACTIVE_MAX_SPEED),
            falloff: INTERACTIVE_FALLOFF,
            min_falloff: INTERACTIVE_MIN_FALLOFF,
        }
    }
}

impl InteractiveConfig {
    /// Radius drawn for a ball at `position` given the pointer
    pub fn display_radius(&self, position: Vec2, pointer: Option<Vec2>) -> f32 {
        match pointer {
            None => self.base_radius,
            Some(p) => {
                let scaled = (position.distance(p) / self.falloff).max(self.min_falloff);
                self.base_radius + 1.0 / (scaled * scaled)
            }
        }
    }
}

/// One ball: bounded by its base radius, drawn at its display radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub display_radius: f32,
    /// Palette index
    pub color: u32,
}

/// Interactive balls state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveBalls {
    pub config: InteractiveConfig,
    pub viewport: Viewport,
    pub balls: Vec<Ball>,
}

impl InteractiveBalls {
    pub fn new<R: Rng + ?Sized>(
        config: InteractiveConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        if !(config.base_radius > 0.0) {
            return Err(SpawnError::InvalidBody {
                radius: config.base_radius,
                mass: 1.0,
            });
        }
        if !config.speed.is_valid() {
            return Err(SpawnError::InvalidSpeed {
                min: config.speed.min,
                max: config.speed.max,
            });
        }
        if !Bounds::inset(viewport, config.base_radius).is_valid() {
            return Err(SpawnError::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
                radius: config.base_radius,
            });
        }

        let balls = (0..config.count)
            .map(|_| {
                let velocity = Vec2::new(
                    config.speed.sample_signed(rng),
                    config.speed.sample_signed(rng),
                );
                let mut body = Body::new(config.base_radius, 1.0, viewport).with_velocity(velocity);
                body.randomize_position(rng);
                Ball {
                    body,
                    display_radius: config.base_radius,
                    color: rng.random_range(0..PALETTE_SIZE),
                }
            })
            .collect::<Vec<_>>();

        log::info!("Interactive balls: {} balls", balls.len());
        Ok(Self {
            config,
            viewport,
            balls,
        })
    }

    /// Advance one frame.
    ///
    /// Movement uses the radius from the previous frame; the new display
    /// radius is computed after the ball has moved.
    pub fn frame(&mut self, pointer: Option<Vec2>) {
        for ball in &mut self.balls {
            reflect_at_bounds(&mut ball.body);
            let unsettle = ball.display_radius - self.config.base_radius;
            ball.body.position += ball.body.velocity * unsettle;
            ball.display_radius = self.config.display_radius(ball.body.position, pointer);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for ball in &mut self.balls {
            ball.body.set_bounds(viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn demo(count: usize) -> InteractiveBalls {
        let mut rng = Pcg32::seed_from_u64(11);
        let config = InteractiveConfig {
            count,
            ..Default::default()
        };
        InteractiveBalls::new(config, Viewport::new(800.0, 600.0), &mut rng).unwrap()
    }

    #[test]
    fn test_display_radius() {
        let config = InteractiveConfig::default();
        let at = Vec2::new(100.0, 100.0);
        assert_eq!(config.display_radius(at, None), 5.0);

        // 250 away: scaled distance 0.5, swell 4
        let r = config.display_radius(at, Some(Vec2::new(350.0, 100.0)));
        assert!((r - 9.0).abs() < 1e-4);

        // On top of the pointer the clamp caps the swell at 1 / 0.15²
        let r = config.display_radius(at, Some(at));
        assert!((r - (5.0 + 1.0 / 0.0225)).abs() < 1e-3);
    }

    #[test]
    fn test_still_without_pointer() {
        let mut demo = demo(50);
        let before: Vec<Vec2> = demo.balls.iter().map(|b| b.body.position).collect();
        for _ in 0..100 {
            demo.frame(None);
        }
        for (ball, pos) in demo.balls.iter().zip(before) {
            assert_eq!(ball.body.position, pos);
            assert_eq!(ball.display_radius, 5.0);
        }
    }

    #[test]
    fn test_moves_after_pointer_appears() {
        let mut demo = demo(1);
        let start = demo.balls[0].body.position;
        let pointer = Some(start + Vec2::new(10.0, 0.0));

        // First frame only sets the radius
        demo.frame(pointer);
        assert_eq!(demo.balls[0].body.position, start);
        assert!(demo.balls[0].display_radius > 40.0);

        demo.frame(pointer);
        assert_ne!(demo.balls[0].body.position, start);
    }

    #[test]
    fn test_bounds_use_base_radius() {
        let demo = demo(5);
        for ball in &demo.balls {
            assert_eq!(ball.body.bounds.x.lower, 5.0);
            assert_eq!(ball.body.bounds.x.upper, 795.0);
        }
    }
}
