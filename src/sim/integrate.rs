//! Wall reflection and the per-frame Euler step
//!
//! Walls only flip the sign of the offending velocity component. Position is
//! never clamped, so a body may overshoot a bound for a frame before it comes
//! back.

use super::body::Body;

/// Point velocity back inside the bounds on any axis the body has crossed
#[inline]
pub fn reflect_at_bounds(body: &mut Body) {
    let bounds = body.bounds;
    if body.position.x < bounds.x.lower {
        body.velocity.x = body.velocity.x.abs();
    }
    if body.position.x > bounds.x.upper {
        body.velocity.x = -body.velocity.x.abs();
    }
    if body.position.y < bounds.y.lower {
        body.velocity.y = body.velocity.y.abs();
    }
    if body.position.y > bounds.y.upper {
        body.velocity.y = -body.velocity.y.abs();
    }
}

/// Advance a body by one frame: reflect at walls, then one Euler step
#[inline]
pub fn advance(body: &mut Body) {
    reflect_at_bounds(body);
    body.position += body.velocity;
}
