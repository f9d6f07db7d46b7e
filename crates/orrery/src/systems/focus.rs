//! Camera focus transitions.
//!
//! At most one transition is in flight. A new request cancels the running
//! one's tweens and starts from wherever the camera currently is, so rapid
//! clicks never leave two animations fighting over the camera.

use glam::Vec3;

use crate::api::config::{CameraConfig, FocusConfig};
use crate::api::error::{OrreryError, Result};
use crate::bodies::registry::{BodyKind, BodyRegistry};
use crate::extensions::easing::Easing;
use crate::extensions::tween::{CameraChannel, Tween, TweenId, Tweener};
use crate::renderer::camera::Camera3D;

/// Where the camera should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// Frame the body at this registry index.
    Body(usize),
    /// Back to the startup view.
    ResetView,
    /// Straight down onto the orbital plane.
    TopView,
}

/// The single in-flight camera animation and the tween handles it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTransition {
    pub request: FocusRequest,
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub start_target: Vec3,
    pub end_target: Vec3,
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
    pub position_tween: TweenId,
    pub target_tween: TweenId,
}

impl FocusTransition {
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
pub struct FocusController {
    focus: FocusConfig,
    home_position: Vec3,
    top_position: Vec3,
    active: Option<FocusTransition>,
}

impl FocusController {
    pub fn new(focus: FocusConfig, camera: &CameraConfig) -> Self {
        Self {
            focus,
            home_position: camera.home_position,
            top_position: camera.top_position,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&FocusTransition> {
        self.active.as_ref()
    }

    /// Start a transition toward `request`.
    ///
    /// An unknown body index is rejected before anything changes. Otherwise
    /// the previous transition's tweens are cancelled and exactly one tween
    /// per camera channel is started.
    pub fn focus_on<T: Tweener + ?Sized>(
        &mut self,
        request: FocusRequest,
        camera: &Camera3D,
        bodies: &BodyRegistry,
        tweener: &mut T,
    ) -> Result<&FocusTransition> {
        let (end_position, end_target) = self.destination(request, camera, bodies)?;
        log::debug!("focus {:?} -> {:?} looking at {:?}", request, end_position, end_target);

        self.cancel(tweener);

        let duration = self.focus.duration;
        let easing = self.focus.easing;
        let position_tween = tweener.animate(Tween::new(
            CameraChannel::Position,
            camera.position,
            end_position,
            duration,
            easing,
        ));
        let target_tween = tweener.animate(Tween::new(
            CameraChannel::Target,
            camera.target,
            end_target,
            duration,
            easing,
        ));

        Ok(&*self.active.insert(FocusTransition {
            request,
            start_position: camera.position,
            end_position,
            start_target: camera.target,
            end_target,
            elapsed: 0.0,
            duration,
            easing,
            position_tween,
            target_tween,
        }))
    }

    /// Accumulate elapsed time. Returns true on the tick the transition ends.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(transition) = self.active.as_mut() else {
            return false;
        };
        transition.elapsed += dt.max(0.0);
        if transition.is_complete() {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Stop the in-flight transition, leaving the camera where it is.
    pub fn cancel<T: Tweener + ?Sized>(&mut self, tweener: &mut T) {
        if let Some(old) = self.active.take() {
            tweener.cancel(old.position_tween);
            tweener.cancel(old.target_tween);
        }
    }

    /// Camera position and look-at target for a request.
    fn destination(
        &self,
        request: FocusRequest,
        camera: &Camera3D,
        bodies: &BodyRegistry,
    ) -> Result<(Vec3, Vec3)> {
        match request {
            FocusRequest::Body(index) => {
                let body = bodies.get(index).ok_or(OrreryError::UnknownBody(index))?;
                let target = body.position();
                let standoff = match body.kind {
                    BodyKind::Star => self.focus.star_standoff,
                    BodyKind::Planet => self.focus.planet_standoff,
                };
                // Approach from the current viewing side.
                let dir = (camera.position - target).try_normalize().unwrap_or(Vec3::Z);
                Ok((target + dir * standoff, target))
            }
            FocusRequest::ResetView => Ok((self.home_position, Vec3::ZERO)),
            FocusRequest::TopView => Ok((self.top_position, Vec3::ZERO)),
        }
    }
}
