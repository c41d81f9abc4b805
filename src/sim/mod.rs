//! Deterministic simulation module
//!
//! All per-frame logic lives here. This module must stay pure:
//! - One fixed step per frame, no delta time
//! - Seeded RNG only, and only at construction
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod body;
pub mod bouncing;
pub mod colliding;
pub mod collision;
pub mod integrate;
pub mod interactive;
pub mod orbit;
pub mod spawn;
pub mod wave;

pub use body::{AxisBounds, Body, Bounds, Viewport};
pub use bouncing::{BouncingCircles, BouncingConfig};
pub use colliding::{CollidingConfig, CollidingParticles, Look};
pub use collision::{are_colliding, closing_rate, resolve_all, resolve_collision, rotate};
pub use integrate::{advance, reflect_at_bounds};
pub use interactive::{Ball, InteractiveBalls, InteractiveConfig};
pub use orbit::{CircularMotion, OrbitConfig, OrbitParticle};
pub use spawn::{SpawnConfig, SpawnError, SpeedRange, create_bodies};
pub use wave::{SineWaves, TrailLine, WaveConfig};
