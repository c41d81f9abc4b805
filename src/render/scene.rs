//! Paint a demo's current state through a [`Renderer`]

use super::{CircleStyle, Color, Renderer};
use crate::demo::Demo;
use crate::sim::{BouncingCircles, CircularMotion, CollidingParticles, InteractiveBalls, SineWaves};

/// Palette for bouncing, colliding and interactive circles
pub const WARM_PALETTE: [&str; 3] = ["coral", "skyblue", "slategray"];
/// Palette for orbit trails
pub const COOL_PALETTE: [&str; 3] = ["aquamarine", "violet", "slateblue"];

/// Translucent wash that fades orbit trails
pub const ORBIT_WASH: Color = Color::Rgba(255, 255, 255, 0.1);
pub const WAVE_BACKGROUND: Color = Color::Named("#333");
/// Default canvas stroke color
pub const OUTLINE: Color = Color::Named("black");

#[inline]
fn pick(palette: &[&'static str; 3], index: u32) -> Color {
    Color::Named(palette[index as usize % palette.len()])
}

/// Paint one frame of any demo
pub fn draw<R: Renderer>(demo: &Demo, renderer: &mut R) {
    match demo {
        Demo::Bouncing(d) => draw_bouncing(d, renderer),
        Demo::Orbit(d) => draw_orbit(d, renderer),
        Demo::Colliding(d) => draw_colliding(d, renderer),
        Demo::Interactive(d) => draw_interactive(d, renderer),
        Demo::Waves(d) => draw_waves(d, renderer),
    }
}

pub fn draw_bouncing<R: Renderer>(demo: &BouncingCircles, renderer: &mut R) {
    renderer.clear(demo.viewport.width, demo.viewport.height);
    for (body, &color) in demo.bodies.iter().zip(&demo.colors) {
        let style = CircleStyle {
            stroke: Some(OUTLINE),
            fill: Some(pick(&WARM_PALETTE, color)),
            fill_alpha: 1.0,
        };
        renderer.circle(body.position, body.radius, style);
    }
}

pub fn draw_colliding<R: Renderer>(demo: &CollidingParticles, renderer: &mut R) {
    renderer.clear(demo.viewport.width, demo.viewport.height);
    for (body, look) in demo.bodies.iter().zip(&demo.looks) {
        let color = pick(&WARM_PALETTE, look.color);
        let style = CircleStyle {
            stroke: Some(color),
            fill: Some(color),
            fill_alpha: look.opacity,
        };
        renderer.circle(body.position, body.radius, style);
    }
}

pub fn draw_interactive<R: Renderer>(demo: &InteractiveBalls, renderer: &mut R) {
    renderer.clear(demo.viewport.width, demo.viewport.height);
    for ball in &demo.balls {
        renderer.circle(
            ball.body.position,
            ball.display_radius,
            CircleStyle::filled(pick(&WARM_PALETTE, ball.color)),
        );
    }
}

pub fn draw_orbit<R: Renderer>(demo: &CircularMotion, renderer: &mut R) {
    renderer.fill_background(demo.viewport.width, demo.viewport.height, ORBIT_WASH);
    for p in &demo.particles {
        renderer.segment(
            p.previous,
            p.position,
            p.line_width,
            pick(&COOL_PALETTE, p.color),
        );
    }
}

pub fn draw_waves<R: Renderer>(demo: &SineWaves, renderer: &mut R) {
    renderer.fill_background(demo.viewport.width, demo.viewport.height, WAVE_BACKGROUND);
    for line in demo.trail_lines() {
        renderer.polyline(&line.points, Color::Hsla(line.hue, 80.0, 60.0, line.alpha));
    }
}
