//! Scene configuration
//!
//! Tunables for the decorative presets. Defaults encode the values the site
//! ships with; a JSON document may override any subset of them.
//!
//! ```rust,ignore
//! let config = SceneConfig::from_json_str(r#"{ "pulse_trail": { "speed": 0.5 } }"#)?;
//! ```

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{OrbitPath, PulseMotion, QuadraticBezier};
use crate::errors::{Result, SceneError};

/// One raven's orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbiterConfig {
    pub name: String,
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
    /// Radians.
    pub phase_offset: f32,
    /// Linear RGB tint.
    pub tint: [f32; 3],
}

impl Default for OrbiterConfig {
    fn default() -> Self {
        Self {
            name: "Huginn".into(),
            radius: 4.0,
            angular_speed: 0.3,
            phase_offset: 0.0,
            tint: [0.55, 0.75, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RavenConfig {
    /// Sprite image, relative to the working directory.
    pub texture: String,
    pub scale: f32,
    pub opacity: f32,
    pub vertical_speed: f32,
    pub vertical_amplitude: f32,
    pub orbiters: Vec<OrbiterConfig>,
}

impl Default for RavenConfig {
    fn default() -> Self {
        Self {
            texture: "assets/raven.png".into(),
            scale: 0.8,
            opacity: 0.9,
            vertical_speed: 0.8,
            vertical_amplitude: 0.4,
            orbiters: vec![
                OrbiterConfig::default(),
                OrbiterConfig {
                    name: "Muninn".into(),
                    radius: 5.5,
                    angular_speed: 0.22,
                    phase_offset: PI,
                    tint: [0.8, 0.6, 1.0],
                },
            ],
        }
    }
}

impl RavenConfig {
    #[must_use]
    pub fn orbit_path(&self, orbiter: &OrbiterConfig) -> OrbitPath {
        OrbitPath::new(orbiter.radius, orbiter.angular_speed, orbiter.phase_offset)
            .with_bob(self.vertical_speed, self.vertical_amplitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTrailConfig {
    pub start: [f32; 3],
    pub control: [f32; 3],
    pub end: [f32; 3],
    /// Curve traversals per second.
    pub speed: f32,
    pub base_size: f32,
    pub amplitude: f32,
    /// Radians per second.
    pub frequency: f32,
    pub line_color: [f32; 3],
    pub line_opacity: f32,
    pub marker_color: [f32; 3],
    pub light_intensity: f32,
    pub light_distance: f32,
}

impl Default for PulseTrailConfig {
    fn default() -> Self {
        Self {
            start: [0.0, -2.0, 3.0],
            control: [2.0, 0.0, 2.0],
            end: [0.3, 1.9, 0.5],
            speed: 0.25,
            base_size: 0.08,
            amplitude: 0.03,
            frequency: 6.0,
            line_color: [0.3, 0.8, 1.0],
            line_opacity: 0.5,
            marker_color: [0.5, 0.9, 1.0],
            light_intensity: 2.0,
            light_distance: 3.0,
        }
    }
}

impl PulseTrailConfig {
    #[must_use]
    pub fn curve(&self) -> QuadraticBezier {
        QuadraticBezier::new(
            Vec3::from_array(self.start),
            Vec3::from_array(self.control),
            Vec3::from_array(self.end),
        )
    }

    #[must_use]
    pub fn motion(&self) -> PulseMotion {
        PulseMotion {
            speed: self.speed,
            base_size: self.base_size,
            amplitude: self.amplitude,
            frequency: self.frequency,
        }
    }
}

/// Top-level settings for the decorative scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub ambient_intensity: f32,
    pub ravens: RavenConfig,
    pub pulse_trail: PulseTrailConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.4,
            ravens: RavenConfig::default(),
            pulse_trail: PulseTrailConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            log::warn!("Rejected scene config: {err}");
        }
        result
    }

    fn check(&self) -> Result<()> {
        non_negative("ambient_intensity", self.ambient_intensity)?;

        let ravens = &self.ravens;
        if ravens.orbiters.is_empty() {
            return Err(SceneError::invalid("ravens.orbiters", "at least one orbiter is required"));
        }
        positive("ravens.scale", ravens.scale)?;
        unit_interval("ravens.opacity", ravens.opacity)?;
        finite("ravens.vertical_speed", ravens.vertical_speed)?;
        finite("ravens.vertical_amplitude", ravens.vertical_amplitude)?;
        for (i, orbiter) in ravens.orbiters.iter().enumerate() {
            non_negative(&format!("ravens.orbiters[{i}].radius"), orbiter.radius)?;
            finite(&format!("ravens.orbiters[{i}].angular_speed"), orbiter.angular_speed)?;
            finite(&format!("ravens.orbiters[{i}].phase_offset"), orbiter.phase_offset)?;
            color(&format!("ravens.orbiters[{i}].tint"), orbiter.tint)?;
        }

        let trail = &self.pulse_trail;
        for (name, point) in [
            ("pulse_trail.start", trail.start),
            ("pulse_trail.control", trail.control),
            ("pulse_trail.end", trail.end),
        ] {
            if !point.iter().all(|c| c.is_finite()) {
                return Err(SceneError::invalid(name, "must be finite"));
            }
        }
        finite("pulse_trail.speed", trail.speed)?;
        non_negative("pulse_trail.base_size", trail.base_size)?;
        non_negative("pulse_trail.amplitude", trail.amplitude)?;
        if trail.amplitude > trail.base_size {
            return Err(SceneError::invalid(
                "pulse_trail.amplitude",
                "must not exceed base_size (marker would invert)",
            ));
        }
        finite("pulse_trail.frequency", trail.frequency)?;
        color("pulse_trail.line_color", trail.line_color)?;
        unit_interval("pulse_trail.line_opacity", trail.line_opacity)?;
        color("pulse_trail.marker_color", trail.marker_color)?;
        non_negative("pulse_trail.light_intensity", trail.light_intensity)?;
        non_negative("pulse_trail.light_distance", trail.light_distance)?;
        Ok(())
    }
}

fn finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::invalid(name, "must be finite"))
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(SceneError::invalid(name, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

fn positive(name: &str, value: f32) -> Result<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(SceneError::invalid(name, format!("must be > 0, got {value}")));
    }
    Ok(())
}

fn unit_interval(name: &str, value: f32) -> Result<()> {
    non_negative(name, value)?;
    if value > 1.0 {
        return Err(SceneError::invalid(name, format!("must be <= 1, got {value}")));
    }
    Ok(())
}

fn color(name: &str, rgb: [f32; 3]) -> Result<()> {
    if rgb.iter().all(|c| c.is_finite() && *c >= 0.0) {
        Ok(())
    } else {
        Err(SceneError::invalid(name, "components must be finite and >= 0"))
    }
}
