//! Demo selection and the per-frame entry point
//!
//! A `Demo` owns exactly one simulation. The host calls [`Demo::frame`] once
//! per animation frame and paints the result with [`crate::render::scene::draw`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{
    BouncingCircles, CircularMotion, CollidingParticles, InteractiveBalls, SineWaves, SpawnError,
    Viewport,
};

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DemoKind {
    BouncingCircles,
    CircularMotion,
    #[default]
    CollidingParticles,
    InteractiveBalls,
    SineWaves,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::BouncingCircles,
        DemoKind::CircularMotion,
        DemoKind::CollidingParticles,
        DemoKind::InteractiveBalls,
        DemoKind::SineWaves,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoKind::BouncingCircles => "bouncing",
            DemoKind::CircularMotion => "orbit",
            DemoKind::CollidingParticles => "colliding",
            DemoKind::InteractiveBalls => "interactive",
            DemoKind::SineWaves => "waves",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bouncing" | "circles" | "canvas-a" => Some(DemoKind::BouncingCircles),
            "orbit" | "circular" | "circular-motion" => Some(DemoKind::CircularMotion),
            "colliding" | "particles" | "colliding-particles" => {
                Some(DemoKind::CollidingParticles)
            }
            "interactive" | "balls" | "interactive-balls" => Some(DemoKind::InteractiveBalls),
            "waves" | "sine" | "sine-waves" => Some(DemoKind::SineWaves),
            _ => None,
        }
    }
}

/// Host input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in canvas coordinates, `None` before the first move
    /// or after it leaves the canvas
    pub pointer: Option<Vec2>,
}

/// A running demo
#[derive(Debug, Clone)]
pub enum Demo {
    Bouncing(BouncingCircles),
    Orbit(CircularMotion),
    Colliding(CollidingParticles),
    Interactive(InteractiveBalls),
    Waves(SineWaves),
}

impl Demo {
    /// Build a demo. The seed drives every random choice made at construction.
    pub fn new(
        kind: DemoKind,
        settings: &Settings,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, SpawnError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        log::info!(
            "Starting {} demo ({}x{}, seed {})",
            kind.as_str(),
            viewport.width,
            viewport.height,
            seed
        );

        let demo = match kind {
            DemoKind::BouncingCircles => {
                Demo::Bouncing(BouncingCircles::new(&settings.bouncing, viewport, &mut rng)?)
            }
            DemoKind::CircularMotion => {
                Demo::Orbit(CircularMotion::new(&settings.orbit, viewport, &mut rng))
            }
            DemoKind::CollidingParticles => Demo::Colliding(CollidingParticles::new(
                settings.colliding.clone(),
                viewport,
                &mut rng,
            )?),
            DemoKind::InteractiveBalls => Demo::Interactive(InteractiveBalls::new(
                settings.interactive.clone(),
                viewport,
                &mut rng,
            )?),
            DemoKind::SineWaves => Demo::Waves(SineWaves::new(settings.waves.clone(), viewport)),
        };
        Ok(demo)
    }

    pub fn kind(&self) -> DemoKind {
        match self {
            Demo::Bouncing(_) => DemoKind::BouncingCircles,
            Demo::Orbit(_) => DemoKind::CircularMotion,
            Demo::Colliding(_) => DemoKind::CollidingParticles,
            Demo::Interactive(_) => DemoKind::InteractiveBalls,
            Demo::Waves(_) => DemoKind::SineWaves,
        }
    }

    /// Advance by exactly one step
    pub fn frame(&mut self, input: &FrameInput) {
        match self {
            Demo::Bouncing(d) => d.frame(),
            Demo::Orbit(d) => d.frame(input.pointer),
            Demo::Colliding(d) => d.frame(input.pointer),
            Demo::Interactive(d) => d.frame(input.pointer),
            Demo::Waves(d) => d.frame(),
        }
    }

    /// Apply a new viewport size
    pub fn resize(&mut self, viewport: Viewport) {
        log::info!("Resize to {}x{}", viewport.width, viewport.height);
        match self {
            Demo::Bouncing(d) => d.resize(viewport),
            Demo::Orbit(d) => d.resize(viewport),
            Demo::Colliding(d) => d.resize(viewport),
            Demo::Interactive(d) => d.resize(viewport),
            Demo::Waves(d) => d.resize(viewport),
        }
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            Demo::Bouncing(d) => d.viewport,
            Demo::Orbit(d) => d.viewport,
            Demo::Colliding(d) => d.viewport,
            Demo::Interactive(d) => d.viewport,
            Demo::Waves(d) => d.viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> Settings {
        let mut settings = Settings::default();
        settings.colliding.count = 30;
        settings.interactive.count = 30;
        settings
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in DemoKind::ALL {
            assert_eq!(DemoKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(DemoKind::from_str(" Sine-Waves "), Some(DemoKind::SineWaves));
        assert_eq!(DemoKind::from_str("tetris"), None);
    }

    #[test]
    fn test_every_demo_builds_and_runs() {
        let settings = small_settings();
        let viewport = Viewport::new(800.0, 600.0);
        let input = FrameInput {
            pointer: Some(Vec2::new(400.0, 300.0)),
        };

        for kind in DemoKind::ALL {
            let mut demo = Demo::new(kind, &settings, viewport, 42).unwrap();
            assert_eq!(demo.kind(), kind);
            for _ in 0..10 {
                demo.frame(&input);
            }
            demo.resize(Viewport::new(640.0, 480.0));
            demo.frame(&FrameInput::default());
            assert_eq!(demo.viewport(), Viewport::new(640.0, 480.0));
        }
    }

    #[test]
    fn test_construction_failure_surfaces() {
        let mut settings = small_settings();
        settings.colliding.count = 500;
        settings.colliding.max_attempts = 50;

        let err = Demo::new(
            DemoKind::CollidingParticles,
            &settings,
            Viewport::new(100.0, 100.0),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, SpawnError::NoRoom { .. }));
    }

    #[test]
    fn test_same_seed_same_demo() {
        let settings = small_settings();
        let viewport = Viewport::new(800.0, 600.0);
        let a = Demo::new(DemoKind::CollidingParticles, &settings, viewport, 7).unwrap();
        let b = Demo::new(DemoKind::CollidingParticles, &settings, viewport, 7).unwrap();
        match (a, b) {
            (Demo::Colliding(a), Demo::Colliding(b)) => assert_eq!(a.bodies, b.bodies),
            _ => panic!("expected colliding demos"),
        }
    }
}
