//! Circle-circle collision detection and elastic response
//!
//! The response is velocity-only: overlapping bodies are never pushed apart.
//! Each pair is solved as a 1-D elastic collision along the line of centers by
//! rotating both velocities into a frame where that line is the x-axis,
//! exchanging the x components, and rotating back.

use glam::Vec2;

use super::body::Body;

/// Rotate a vector counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Whether two circles overlap (touching does not count)
#[inline]
pub fn are_colliding(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Relative velocity projected onto the line from `a` to `b`.
///
/// Negative means the bodies are approaching; zero or positive means they are
/// holding distance or separating.
#[inline]
pub fn closing_rate(a: &Body, b: &Body) -> f32 {
    (b.velocity - a.velocity).dot(b.position - a.position)
}

/// 1-D two-body elastic collision, returns the post-collision velocities
#[inline]
pub fn elastic_1d(u1: f32, u2: f32, m1: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    let v1 = u1 * (m1 - m2) / total + u2 * 2.0 * m2 / total;
    let v2 = u2 * (m2 - m1) / total + u1 * 2.0 * m1 / total;
    (v1, v2)
}

/// Apply an elastic impulse to an approaching pair.
///
/// Returns `false` and leaves both velocities untouched when the pair is not
/// approaching. Does not test for overlap; see [`are_colliding`].
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> bool {
    if closing_rate(a, b) >= 0.0 {
        return false;
    }

    // Coincident centers give atan2(0, 0) = 0
    let delta = b.position - a.position;
    let angle = -delta.y.atan2(delta.x);

    let u1 = rotate(a.velocity, angle);
    let u2 = rotate(b.velocity, angle);

    let (v1x, v2x) = elastic_1d(u1.x, u2.x, a.mass, b.mass);
    let v1 = Vec2::new(v1x, u1.y);
    let v2 = Vec2::new(v2x, u2.y);

    a.velocity = rotate(v1, -angle);
    b.velocity = rotate(v2, -angle);
    true
}

/// Collide `bodies[index]` against every other body, in list order.
///
/// Bodies earlier in the list may already have moved this frame. A pair can be
/// visited again from the other side on the partner's turn; by then it is
/// usually separating and left alone. Returns the number of pairs whose
/// velocities changed.
pub fn resolve_all(index: usize, bodies: &mut [Body]) -> usize {
    let mut resolved = 0;
    for other in 0..bodies.len() {
        if other == index {
            continue;
        }
        let (a, b) = pair_mut(bodies, index, other);
        if are_colliding(a, b) && resolve_collision(a, b) {
            resolved += 1;
        }
    }
    resolved
}

/// Two distinct mutable elements of a slice, in argument order
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
