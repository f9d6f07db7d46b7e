// extensions/tween.rs
//
// Camera tweens: time-bounded interpolation of the camera's position and
// look-at target. Each tween is addressed by a TweenId handle so its owner
// can cancel it before it finishes.
//
// Usage:
//   let mut tweens = TweenState::new();
//   let id = tweens.animate(Tween::new(CameraChannel::Position, from, to, 2.0, Easing::CubicOut));
//   tweens.tick(dt, &mut camera);  // Advances all tweens, writes the camera
//   tweens.cancel(id);             // Stops it where it is

use glam::Vec3;

use super::easing::{ease_vec3, Easing};
use crate::renderer::camera::Camera3D;

/// Which camera property a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraChannel {
    Position,
    Target,
}

/// A single camera interpolation.
#[derive(Debug, Clone)]
pub struct Tween {
    pub channel: CameraChannel,
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(channel: CameraChannel, from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            channel,
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> Vec3 {
        ease_vec3(self.from, self.to, self.progress(), self.easing)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Handle to a running tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// The animation primitive the focus controller drives. Implementations own
/// the per-frame stepping; callers only start and cancel.
pub trait Tweener {
    /// Start a tween. Returns a handle for cancellation.
    fn animate(&mut self, tween: Tween) -> TweenId;

    /// Stop a tween where it is. Returns false if it already finished.
    fn cancel(&mut self, id: TweenId) -> bool;

    fn is_active(&self, id: TweenId) -> bool;
}

/// In-process tweener stepping the core's own camera.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: Vec<(TweenId, Tween)>,
    next_id: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every tween by `dt` seconds in start order and write the
    /// eased values into the camera. Returns how many finished this tick.
    pub fn tick(&mut self, dt: f32, camera: &mut Camera3D) -> usize {
        for (_, tween) in self.tweens.iter_mut() {
            tween.elapsed += dt.max(0.0);
            let value = tween.value();
            match tween.channel {
                CameraChannel::Position => camera.position = value,
                CameraChannel::Target => camera.target = value,
            }
        }

        let before = self.tweens.len();
        self.tweens.retain(|(_, t)| !t.is_complete());
        before - self.tweens.len()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl Tweener for TweenState {
    fn animate(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tweens.push((id, tween));
        id
    }

    fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|(i, _)| *i != id);
        self.tweens.len() != before
    }

    fn is_active(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|(i, _)| *i == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::CameraConfig;

    fn camera() -> Camera3D {
        Camera3D::new(&CameraConfig::default(), 1.0)
    }

    #[test]
    fn tween_position_linear() {
        let mut tweens = TweenState::new();
        let mut cam = camera();
        tweens.animate(Tween::new(
            CameraChannel::Position,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            1.0,
            Easing::Linear,
        ));

        tweens.tick(0.5, &mut cam);
        assert!((cam.position.x - 50.0).abs() < 0.01);

        tweens.tick(0.5, &mut cam);
        assert!((cam.position.x - 100.0).abs() < 0.01);
        assert!(tweens.is_empty());
    }

    #[test]
    fn channels_are_independent() {
        let mut tweens = TweenState::new();
        let mut cam = camera();
        let start = cam.position;
        tweens.animate(Tween::new(
            CameraChannel::Target,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 10.0),
            1.0,
            Easing::Linear,
        ));
        tweens.tick(1.0, &mut cam);
        assert_eq!(cam.position, start);
        assert!((cam.target.z - 10.0).abs() < 1e-5);
    }

    #[test]
    fn cancel_freezes_value() {
        let mut tweens = TweenState::new();
        let mut cam = camera();
        let id = tweens.animate(Tween::new(
            CameraChannel::Position,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            1.0,
            Easing::Linear,
        ));
        tweens.tick(0.25, &mut cam);
        assert!(tweens.is_active(id));
        assert!(tweens.cancel(id));
        assert!(!tweens.cancel(id));

        let frozen = cam.position;
        tweens.tick(0.5, &mut cam);
        assert_eq!(cam.position, frozen);
    }

    #[test]
    fn ease_out_is_ahead_of_linear() {
        let mut tweens = TweenState::new();
        let mut cam = camera();
        tweens.animate(Tween::new(
            CameraChannel::Position,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 100.0),
            2.0,
            Easing::CubicOut,
        ));
        tweens.tick(1.0, &mut cam);
        assert!(cam.position.z > 50.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tweens = TweenState::new();
        let mut cam = camera();
        tweens.animate(Tween::new(
            CameraChannel::Target,
            Vec3::ZERO,
            Vec3::ONE,
            0.0,
            Easing::CubicOut,
        ));
        assert_eq!(tweens.tick(0.0, &mut cam), 1);
        assert_eq!(cam.target, Vec3::ONE);
    }
}
