//! Star and planet state, created once from configuration and never removed.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::api::config::{BodyConfig, SpeedBounds};
use crate::api::error::{OrreryError, Result};

/// Star or planet. Behaviour that differs by kind matches on this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
}

/// One body with its static attributes and per-tick state.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    pub radius: f32,
    pub orbit_radius: f32,
    pub base_rotation_speed: f32,
    pub default_orbital_speed: f32,
    pub description: String,

    orbital_angle: f32,
    rotation_angle: f32,
    current_orbital_speed: f32,
    position: Vec3,
}

impl Body {
    fn from_config(config: &BodyConfig, orbital_angle: f32) -> Self {
        let (orbital_angle, speed) = match config.kind {
            BodyKind::Star => (0.0, 0.0),
            BodyKind::Planet => (orbital_angle, config.orbital_speed),
        };
        let mut body = Self {
            name: config.name.clone(),
            kind: config.kind,
            radius: config.radius,
            orbit_radius: match config.kind {
                BodyKind::Star => 0.0,
                BodyKind::Planet => config.orbit_radius,
            },
            base_rotation_speed: config.rotation_speed,
            default_orbital_speed: speed,
            description: config.description.clone(),
            orbital_angle,
            rotation_angle: 0.0,
            current_orbital_speed: speed,
            position: Vec3::ZERO,
        };
        body.sync_position();
        body
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Angle along the orbit in [0, 2π).
    pub fn orbital_angle(&self) -> f32 {
        self.orbital_angle
    }

    /// Spin angle in [0, 2π).
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Orbital increment in radians per tick. Always 0 for the star.
    pub fn current_orbital_speed(&self) -> f32 {
        self.current_orbital_speed
    }

    /// World position, derived from the orbital angle and orbit radius only.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position a body with this orbit radius has at `angle`.
    pub fn orbit_position(orbit_radius: f32, angle: f32) -> Vec3 {
        Vec3::new(angle.cos() * orbit_radius, 0.0, angle.sin() * orbit_radius)
    }

    pub(crate) fn advance_orbit(&mut self, delta: f32) {
        self.orbital_angle = wrap_angle(self.orbital_angle + delta);
        self.sync_position();
    }

    pub(crate) fn advance_rotation(&mut self, delta: f32) {
        self.rotation_angle = wrap_angle(self.rotation_angle + delta);
    }

    fn sync_position(&mut self) {
        self.position = Self::orbit_position(self.orbit_radius, self.orbital_angle);
    }
}

/// Wrap an angle into [0, 2π). Handles negative increments.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Ordered, index-stable storage for every body in the session.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    bounds: SpeedBounds,
}

impl BodyRegistry {
    /// Build bodies in config order. Planet orbital angles come from
    /// `initial_angle` or are drawn uniformly from [0, 2π); rotation angles
    /// start at 0.
    pub fn create<R: Rng>(
        configs: &[BodyConfig],
        bounds: SpeedBounds,
        rng: &mut R,
    ) -> Self {
        let bodies = configs
            .iter()
            .map(|config| {
                let angle = match config.initial_angle {
                    Some(angle) => wrap_angle(angle),
                    None => rng.gen_range(0.0..TAU),
                };
                Body::from_config(config, angle)
            })
            .collect();
        Self { bodies, bounds }
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn speed_bounds(&self) -> SpeedBounds {
        self.bounds
    }

    /// Current speed of every body, in registry order.
    pub fn speeds(&self) -> Vec<f32> {
        self.bodies.iter().map(|b| b.current_orbital_speed).collect()
    }

    /// Apply a UI speed change. The value is clamped into the configured
    /// bounds; the stored value is returned.
    pub fn set_speed(&mut self, index: usize, value: f32) -> Result<f32> {
        if !value.is_finite() {
            return Err(OrreryError::InvalidSpeed(value));
        }
        let bounds = self.bounds;
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(OrreryError::UnknownBody(index))?;
        match body.kind {
            BodyKind::Star => Err(OrreryError::StarHasNoOrbit(index)),
            BodyKind::Planet => {
                body.current_orbital_speed = bounds.clamp(value);
                Ok(body.current_orbital_speed)
            }
        }
    }

    /// Put every planet back on a fresh random orbit position with zero spin
    /// and its default speed.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        for body in self.bodies.iter_mut() {
            if body.kind == BodyKind::Planet {
                body.orbital_angle = rng.gen_range(0.0..TAU);
                body.rotation_angle = 0.0;
                body.current_orbital_speed = body.default_orbital_speed;
                body.sync_position();
            }
        }
    }
}
