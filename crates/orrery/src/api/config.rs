use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::{OrreryError, Result};
use crate::bodies::registry::BodyKind;
use crate::bodies::solar;
use crate::extensions::easing::Easing;

/// Static description of one body, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub kind: BodyKind,
    /// Bounding sphere radius in world units.
    pub radius: f32,
    /// Circular orbit radius around the origin. Must be 0 for the star.
    #[serde(default)]
    pub orbit_radius: f32,
    /// Default orbital increment in radians per tick.
    #[serde(default)]
    pub orbital_speed: f32,
    /// Spin increment in radians per tick. May be negative (retrograde).
    #[serde(default)]
    pub rotation_speed: f32,
    /// Display text for tooltips and the info panel.
    #[serde(default)]
    pub description: String,
    /// Fixed starting orbital angle. Drawn at random when absent.
    #[serde(default)]
    pub initial_angle: Option<f32>,
}

/// Closed range every UI-driven speed is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBounds {
    pub min: f32,
    pub max: f32,
}

impl SpeedBounds {
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for SpeedBounds {
    fn default() -> Self {
        Self { min: 0.001, max: 0.08 }
    }
}

/// How per-tick angle increments relate to wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimeScaling {
    /// One increment per tick regardless of elapsed time. Perceived speed
    /// follows the display refresh rate.
    #[default]
    PerTick,
    /// Increments are scaled by `dt * reference_fps`, so a tick at the
    /// reference rate advances by exactly one increment.
    PerSecond { reference_fps: f32 },
}

impl TimeScaling {
    /// Multiplier applied to every angle increment for a tick of `dt` seconds.
    pub fn factor(&self, dt: f32) -> f32 {
        match *self {
            TimeScaling::PerTick => 1.0,
            TimeScaling::PerSecond { reference_fps } => (dt * reference_fps).max(0.0),
        }
    }
}

/// Perspective camera setup and the two fixed preset views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Startup and "reset view" camera position.
    pub home_position: Vec3,
    /// "Top view" camera position.
    pub top_position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 2000.0,
            home_position: Vec3::new(0.0, 80.0, 160.0),
            top_position: Vec3::new(0.0, 200.0, 0.0),
        }
    }
}

/// Camera focus transition tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Transition length in seconds.
    pub duration: f32,
    /// Camera distance kept from the star when focusing it.
    pub star_standoff: f32,
    /// Camera distance kept from a planet when focusing it.
    pub planet_standoff: f32,
    /// Must be an ease-out curve.
    pub easing: Easing,
    /// Longest step, in seconds, a transition advances in one frame. A
    /// stalled frame slows the animation down instead of skipping it.
    pub max_step: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            star_standoff: 50.0,
            planet_standoff: 25.0,
            easing: Easing::CubicOut,
            max_step: 0.1,
        }
    }
}

/// Full static configuration for an orrery session.
///
/// Every field has a default, so a JSON document only needs to name what it
/// overrides:
///
/// ```
/// let cfg = orrery::OrreryConfig::from_json(r#"{ "star_rotation_step": 0.01 }"#).unwrap();
/// assert_eq!(cfg.bodies.len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Bodies in registry order. Slider `i` maps to body `i`.
    pub bodies: Vec<BodyConfig>,
    pub speed_bounds: SpeedBounds,
    /// Star spin increment per tick.
    pub star_rotation_step: f32,
    pub time_scaling: TimeScaling,
    pub camera: CameraConfig,
    pub focus: FocusConfig,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            bodies: solar::default_bodies(),
            speed_bounds: SpeedBounds::default(),
            star_rotation_step: 0.005,
            time_scaling: TimeScaling::default(),
            camera: CameraConfig::default(),
            focus: FocusConfig::default(),
        }
    }
}

impl OrreryConfig {
    /// Parse a configuration from a JSON string. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the invariants the core relies on.
    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            return Err(invalid("at least one body is required"));
        }

        let stars = self.bodies.iter().filter(|b| b.kind == BodyKind::Star).count();
        if stars != 1 {
            return Err(invalid(format!("expected exactly one star, found {}", stars)));
        }

        let bounds = self.speed_bounds;
        if !(bounds.min > 0.0 && bounds.min <= bounds.max && bounds.max.is_finite()) {
            return Err(invalid(format!(
                "speed bounds [{}, {}] must satisfy 0 < min <= max",
                bounds.min, bounds.max
            )));
        }

        let mut names = HashSet::new();
        for body in &self.bodies {
            if !names.insert(body.name.as_str()) {
                return Err(invalid(format!("duplicate body name '{}'", body.name)));
            }
            if !(body.radius > 0.0 && body.radius.is_finite()) {
                return Err(invalid(format!("'{}' must have a positive radius", body.name)));
            }
            if !body.rotation_speed.is_finite() {
                return Err(invalid(format!("'{}' has a non-finite rotation speed", body.name)));
            }
            match body.kind {
                BodyKind::Star => {
                    if body.orbit_radius != 0.0 || body.orbital_speed != 0.0 {
                        return Err(invalid(format!(
                            "star '{}' must have zero orbit radius and orbital speed",
                            body.name
                        )));
                    }
                }
                BodyKind::Planet => {
                    if !(body.orbit_radius >= 0.0 && body.orbit_radius.is_finite()) {
                        return Err(invalid(format!(
                            "'{}' must have a finite, non-negative orbit radius",
                            body.name
                        )));
                    }
                    if let Some(angle) = body.initial_angle {
                        if !angle.is_finite() {
                            return Err(invalid(format!(
                                "'{}' has a non-finite initial angle",
                                body.name
                            )));
                        }
                    }
                    if !bounds.contains(body.orbital_speed) {
                        return Err(invalid(format!(
                            "'{}' default speed {} is outside [{}, {}]",
                            body.name, body.orbital_speed, bounds.min, bounds.max
                        )));
                    }
                }
            }
        }

        if !self.star_rotation_step.is_finite() {
            return Err(invalid("star_rotation_step must be finite"));
        }

        let focus = &self.focus;
        if !(focus.duration > 0.0 && focus.duration.is_finite()) {
            return Err(invalid("focus duration must be positive"));
        }
        if !focus.easing.is_ease_out() {
            return Err(invalid(format!("focus easing {:?} is not an ease-out curve", focus.easing)));
        }
        if !(focus.max_step > 0.0 && focus.max_step.is_finite()) {
            return Err(invalid("focus max_step must be positive"));
        }

        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(invalid("camera fov must be in (0, 180) degrees"));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(invalid("camera planes must satisfy 0 < near < far"));
        }

        if let TimeScaling::PerSecond { reference_fps } = self.time_scaling {
            if !(reference_fps > 0.0) {
                return Err(invalid("reference_fps must be positive"));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> OrreryError {
    OrreryError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = OrreryConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.bodies[0].kind, BodyKind::Star);
        assert_eq!(cfg.speed_bounds, SpeedBounds { min: 0.001, max: 0.08 });
        assert_eq!(cfg.focus.duration, 2.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = OrreryConfig::from_json(
            r#"{
                "time_scaling": { "mode": "per_second", "reference_fps": 60.0 },
                "focus": { "duration": 1.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.time_scaling, TimeScaling::PerSecond { reference_fps: 60.0 });
        assert_eq!(cfg.focus.duration, 1.5);
        assert_eq!(cfg.focus.planet_standoff, 25.0);
        assert_eq!(cfg.camera.home_position, Vec3::new(0.0, 80.0, 160.0));
        cfg.validate().unwrap();
    }

    #[test]
    fn custom_bodies_from_json() {
        let cfg = OrreryConfig::from_json(
            r#"{
                "bodies": [
                    { "name": "Sol", "kind": "star", "radius": 8.0 },
                    { "name": "Rock", "kind": "planet", "radius": 1.0,
                      "orbit_radius": 20.0, "orbital_speed": 0.02, "rotation_speed": 0.01 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.bodies.len(), 2);
        assert_eq!(cfg.bodies[1].orbit_radius, 20.0);
        cfg.validate().unwrap();
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = OrreryConfig::from_json("{ bodies: ").unwrap_err();
        assert!(matches!(err, OrreryError::Config(_)));
    }

    #[test]
    fn rejects_two_stars() {
        let mut cfg = OrreryConfig::default();
        cfg.bodies[1].kind = BodyKind::Star;
        cfg.bodies[1].orbit_radius = 0.0;
        cfg.bodies[1].orbital_speed = 0.0;
        assert!(matches!(cfg.validate(), Err(OrreryError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_orbiting_star() {
        let mut cfg = OrreryConfig::default();
        cfg.bodies[0].orbit_radius = 3.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut cfg = OrreryConfig::default();
        cfg.bodies[2].name = cfg.bodies[1].name.clone();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_default_speed_out_of_bounds() {
        let mut cfg = OrreryConfig::default();
        cfg.bodies[1].orbital_speed = 0.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_ease_out_focus_curve() {
        let cfg = OrreryConfig::from_json(r#"{ "focus": { "easing": "quad_in" } }"#).unwrap();
        assert!(matches!(cfg.validate(), Err(OrreryError::InvalidConfig(_))));

        let cfg = OrreryConfig::from_json(r#"{ "focus": { "easing": "power1.out" } }"#).unwrap();
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_infinite_orbit_radius() {
        let mut cfg = OrreryConfig::default();
        cfg.bodies[3].orbit_radius = f32::INFINITY;
        assert!(matches!(cfg.validate(), Err(OrreryError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_finite_rotation_speed() {
        let mut cfg = OrreryConfig::default();
        cfg.bodies[2].rotation_speed = f32::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = OrreryConfig::default();
        cfg.bodies[0].rotation_speed = f32::NEG_INFINITY;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_star_rotation_step() {
        let mut cfg = OrreryConfig::default();
        cfg.star_rotation_step = f32::INFINITY;
        assert!(matches!(cfg.validate(), Err(OrreryError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_max_step() {
        let mut cfg = OrreryConfig::default();
        cfg.focus.max_step = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn per_tick_ignores_dt() {
        assert_eq!(TimeScaling::PerTick.factor(0.5), 1.0);
        let scaled = TimeScaling::PerSecond { reference_fps: 60.0 };
        assert!((scaled.factor(1.0 / 30.0) - 2.0).abs() < 1e-5);
        assert_eq!(scaled.factor(-1.0), 0.0);
    }
}
