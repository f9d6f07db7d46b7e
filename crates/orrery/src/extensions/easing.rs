// extensions/easing.rs
//
// Easing curves for camera transitions.
// Pure math over normalized time; no knowledge of cameras or bodies.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Easing curve. The `power*` aliases accept the names web animation
/// libraries use, so host-side configs can be shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    #[default]
    #[serde(alias = "none")]
    Linear,
    #[serde(alias = "power1.in")]
    QuadIn,
    /// Slow end.
    #[serde(alias = "power1.out")]
    QuadOut,
    #[serde(alias = "power1.inOut")]
    QuadInOut,
    /// Stronger slow end. The default focus curve.
    #[serde(alias = "power2.out")]
    CubicOut,
    #[serde(alias = "sine.inOut")]
    SineInOut,
    /// Dramatic slow end.
    #[serde(alias = "expo.out")]
    ExpoOut,
}

impl Easing {
    /// Map normalized time `t` (clamped to [0, 1]) onto eased progress.
    /// Every curve here is monotonic and hits 0 and 1 exactly at the ends.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::ExpoOut => {
                if t == 1.0 { 1.0 } else { 1.0 - 2.0_f32.powf(-10.0 * t) }
            }
        }
    }

    /// Whether the curve decelerates into its end value.
    pub fn is_ease_out(self) -> bool {
        matches!(self, Easing::QuadOut | Easing::CubicOut | Easing::ExpoOut)
    }
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate between two points along an easing curve.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}
