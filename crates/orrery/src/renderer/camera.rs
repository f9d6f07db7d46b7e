use glam::{Mat4, Vec2, Vec3};

use crate::api::config::CameraConfig;

/// A half-line in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Perspective camera looking from `position` at `target`, Y-up.
/// Projection uses OpenGL clip conventions (NDC z in [-1, 1]) to match a
/// WebGL host.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera3D {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: config.home_position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: config.fov_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.screen_up())
    }

    /// `up`, unless the view direction is parallel to it (straight top-down
    /// or bottom-up views), where screen-up falls back to -Z or +Z.
    fn screen_up(&self) -> Vec3 {
        let forward = self.target - self.position;
        if forward.cross(self.up).length_squared() > 1e-12 * forward.length_squared() {
            self.up
        } else if forward.y < 0.0 {
            Vec3::NEG_Z
        } else {
            Vec3::Z
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Keep the projection in step with the viewport. Must run before any
    /// pick that follows a resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Project a world point to normalized device coordinates.
    /// Returns None for points behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Build the pick ray through a pointer position given in NDC.
    ///
    /// Returns None when the camera sits on its own target, since no view
    /// direction exists.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let inverse = self.view_projection().inverse();
        if !inverse.is_finite() {
            return None;
        }
        let on_plane = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        let direction = (on_plane - self.position).try_normalize()?;
        Some(Ray {
            origin: self.position,
            direction,
        })
    }
}

/// Pointer surface size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Whether both dimensions are usable for projection.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Convert screen pixels (origin top-left, Y down) to NDC, clamping
    /// positions outside the surface onto its edge.
    pub fn to_ndc(&self, screen: Vec2) -> Vec2 {
        let x = (screen.x / self.width) * 2.0 - 1.0;
        let y = -((screen.y / self.height) * 2.0 - 1.0);
        let ndc = Vec2::new(x, y);
        if ndc.is_finite() {
            ndc.clamp(Vec2::NEG_ONE, Vec2::ONE)
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        Camera3D::new(&CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn starts_at_home_looking_at_origin() {
        let cam = camera();
        assert_eq!(cam.position, Vec3::new(0.0, 80.0, 160.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert!((cam.fov_y - 60f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn center_ray_hits_target() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO).unwrap();
        let expected = (cam.target - cam.position).normalize();
        assert!((ray.direction - expected).length() < 1e-4);
        assert_eq!(ray.origin, cam.position);
    }

    #[test]
    fn ray_passes_through_projected_point() {
        let cam = camera();
        let point = Vec3::new(25.0, 0.0, 10.0);
        let ndc = cam.project(point).unwrap();
        let ray = cam.ray_from_ndc(ndc.truncate()).unwrap();
        let to_point = (point - ray.origin).normalize();
        assert!((ray.direction - to_point).length() < 1e-3);
    }

    #[test]
    fn degenerate_camera_has_no_ray() {
        let mut cam = camera();
        cam.target = cam.position;
        assert!(cam.ray_from_ndc(Vec2::ZERO).is_none());
    }

    #[test]
    fn top_down_view_still_picks() {
        let mut cam = camera();
        cam.position = Vec3::new(0.0, 200.0, 0.0);
        let ray = cam.ray_from_ndc(Vec2::ZERO).unwrap();
        assert!((ray.direction - Vec3::NEG_Y).length() < 1e-4);

        // Screen-up maps to -Z, like a WebGL host's lookAt.
        let up = cam.ray_from_ndc(Vec2::new(0.0, 0.5)).unwrap();
        assert!(up.direction.z < 0.0);
    }

    #[test]
    fn resize_changes_off_center_rays() {
        let mut cam = camera();
        let wide = cam.ray_from_ndc(Vec2::new(1.0, 0.0)).unwrap();
        cam.set_aspect(1.0);
        let square = cam.ray_from_ndc(Vec2::new(1.0, 0.0)).unwrap();
        assert!(wide.direction.x > square.direction.x);
    }

    #[test]
    fn set_aspect_ignores_garbage() {
        let mut cam = camera();
        cam.set_aspect(0.0);
        cam.set_aspect(f32::NAN);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn ndc_maps_corners_and_center() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn ndc_clamps_outside_pointer() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(-50.0, 900.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(5000.0, -1.0)).x, 1.0);
    }
}
