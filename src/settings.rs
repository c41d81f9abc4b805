//! Demo settings
//!
//! Every field has a default, so a settings document only needs the values it
//! changes. On the web the document comes from the canvas `data-settings`
//! attribute; natively from a JSON file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{BouncingConfig, CollidingConfig, InteractiveConfig, OrbitConfig, WaveConfig};

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Settings for every demo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
    pub colliding: CollidingConfig,
    pub bouncing: BouncingConfig,
    pub interactive: InteractiveConfig,
    pub orbit: OrbitConfig,
    pub waves: WaveConfig,
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulations cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let c = &self.colliding;
        check("colliding.radius", c.radius > 0.0, "must be positive")?;
        check("colliding.mass", c.mass > 0.0, "must be positive")?;
        check("colliding.speed", c.speed >= 0.0, "must not be negative")?;
        check("colliding.max_attempts", c.max_attempts > 0, "must be non-zero")?;
        check(
            "colliding.fade_in",
            (0.0..=1.0).contains(&c.fade_in),
            "must be within 0..=1",
        )?;
        check(
            "colliding.fade_out",
            (0.0..=1.0).contains(&c.fade_out),
            "must be within 0..=1",
        )?;

        let b = &self.bouncing;
        check("bouncing.min_radius", b.min_radius > 0.0, "must be positive")?;
        check(
            "bouncing.max_radius",
            b.max_radius >= b.min_radius,
            "must not be below min_radius",
        )?;
        check("bouncing.speed", b.speed.is_valid(), "min must be within 0..=max")?;

        let i = &self.interactive;
        check("interactive.base_radius", i.base_radius > 0.0, "must be positive")?;
        check("interactive.speed", i.speed.is_valid(), "min must be within 0..=max")?;
        check("interactive.falloff", i.falloff > 0.0, "must be positive")?;
        check("interactive.min_falloff", i.min_falloff > 0.0, "must be positive")?;

        let o = &self.orbit;
        for (field, (min, max)) in [
            ("orbit.line_width", o.line_width),
            ("orbit.rotation_speed", o.rotation_speed),
            ("orbit.follow_speed", o.follow_speed),
            ("orbit.distance", o.distance),
        ] {
            check(field, min <= max, "range is empty")?;
        }
        check(
            "orbit.follow_speed",
            o.follow_speed.0 >= 0.0 && o.follow_speed.1 <= 1.0,
            "must be within 0..=1",
        )?;

        let w = &self.waves;
        check("waves.wavelength", w.wavelength > 0.0, "must be positive")?;
        check("waves.trail", w.trail > 0, "must be non-zero")?;

        Ok(())
    }
}

fn check(field: &'static str, ok: bool, reason: &'static str) -> Result<(), SettingsError> {
    if ok {
        Ok(())
    } else {
        Err(SettingsError::Invalid { field, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.colliding.count, COLLIDING_COUNT);
        assert_eq!(settings.interactive.count, INTERACTIVE_COUNT);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_document() {
        let settings = Settings::from_json(r#"{ "seed": 9, "colliding": { "count": 12 } }"#).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.colliding.count, 12);
        assert_eq!(settings.colliding.radius, COLLIDING_RADIUS);
        assert_eq!(settings.waves, WaveConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.bouncing.count = 3;
        settings.orbit.distance = (50.0, 60.0);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "colliding": { "mass": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "colliding.mass",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "bouncing": { "speed": { "min": 5.0, "max": 1.0 } } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "bouncing.speed",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "colliding": { "max_attempts": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("colliding.max_attempts"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
