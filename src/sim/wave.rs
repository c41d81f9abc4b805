//! Scrolling sine waves demo
//!
//! One sine wave drawn several times, each copy shifted left and faded by its
//! place in the trail. The phase scrolls and the hue cycles every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Viewport;
use crate::consts::*;

/// Wave shape and trail layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub amplitude: f32,
    pub wavelength: f32,
    /// Phase advanced per frame is frequency / 100
    pub frequency: f32,
    /// Number of copies drawn
    pub trail: u32,
    /// Horizontal shift between copies
    pub trail_gap: f32,
    /// Hue advanced per frame, degrees
    pub hue_step: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: WAVE_AMPLITUDE,
            wavelength: WAVE_LENGTH,
            frequency: WAVE_FREQUENCY,
            trail: WAVE_TRAIL,
            trail_gap: WAVE_TRAIL_GAP,
            hue_step: WAVE_HUE_STEP,
        }
    }
}

/// One copy of the wave, ready to stroke
#[derive(Debug, Clone, PartialEq)]
pub struct TrailLine {
    pub points: Vec<Vec2>,
    /// Hue in degrees (not wrapped)
    pub hue: f32,
    /// Alpha, 0-1
    pub alpha: f32,
}

/// Sine waves state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SineWaves {
    pub config: WaveConfig,
    pub viewport: Viewport,
    pub x_offset: f32,
    pub hue: f32,
}

impl SineWaves {
    pub fn new(config: WaveConfig, viewport: Viewport) -> Self {
        log::info!("Sine waves: trail of {}", config.trail);
        Self {
            config,
            viewport,
            x_offset: 0.0,
            hue: 0.0,
        }
    }

    /// Height of the wave at horizontal sample `x`
    #[inline]
    pub fn sample(&self, x: f32) -> f32 {
        self.config.amplitude * (x / self.config.wavelength - self.x_offset).sin()
            + self.viewport.height / 2.0
    }

    /// Trail copy `index` for the current phase (0 is the leading copy)
    pub fn trail_line(&self, index: u32) -> TrailLine {
        let c = &self.config;
        let shift = index as f32 * c.trail_gap;
        let fraction = index as f32 / c.trail as f32;
        let extent = (self.viewport.width + c.trail as f32 * c.trail_gap).max(0.0) as u32;

        let points = (0..extent)
            .map(|x| {
                let x = x as f32;
                Vec2::new(x - shift, self.sample(x))
            })
            .collect();

        TrailLine {
            points,
            hue: self.hue - fraction * 100.0,
            alpha: (self.x_offset - fraction).sin().abs(),
        }
    }

    /// Every trail copy, leading copy first
    pub fn trail_lines(&self) -> Vec<TrailLine> {
        (0..self.config.trail).map(|i| self.trail_line(i)).collect()
    }

    /// Scroll the phase and cycle the hue
    pub fn frame(&mut self) {
        self.x_offset += self.config.frequency / 100.0;
        self.hue += self.config.hue_step;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_sample_centered() {
        let waves = SineWaves::new(WaveConfig::default(), Viewport::new(800.0, 600.0));
        assert!((waves.sample(0.0) - 300.0).abs() < 1e-4);
        // Quarter wavelength peaks at the amplitude
        assert!((waves.sample(50.0 * PI / 2.0) - 450.0).abs() < 1e-2);
    }

    #[test]
    fn test_trail_line_layout() {
        let waves = SineWaves::new(WaveConfig::default(), Viewport::new(100.0, 200.0));
        let lines = waves.trail_lines();
        assert_eq!(lines.len(), 15);

        // width + trail * gap samples, unit spacing
        assert_eq!(lines[0].points.len(), 325);
        assert_eq!(lines[0].points[0].x, 0.0);
        assert_eq!(lines[3].points[0].x, -45.0);
        assert_eq!(lines[3].points[0].y, lines[0].points[0].y);

        assert_eq!(lines[0].hue, 0.0);
        assert!((lines[3].hue - -20.0).abs() < 1e-4);
        // sin(0) at the start of the scroll
        assert_eq!(lines[0].alpha, 0.0);
        assert!(lines[3].alpha > 0.0);
    }

    #[test]
    fn test_frame_scrolls() {
        let mut waves = SineWaves::new(WaveConfig::default(), Viewport::new(100.0, 100.0));
        for _ in 0..10 {
            waves.frame();
        }
        assert!((waves.x_offset - 0.1).abs() < 1e-5);
        assert!((waves.hue - 2.0).abs() < 1e-4);
    }
}
