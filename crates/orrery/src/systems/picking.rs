//! Ray-cast picking against body bounding spheres.
//!
//! Stateless and allocation-free: one linear scan per query, so a pointer
//! event costs at most one pick.

use glam::{Vec2, Vec3};

use crate::bodies::registry::Body;
use crate::renderer::camera::{Camera3D, Ray};

/// The nearest body under a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Index into the candidate slice (the registry order).
    pub index: usize,
    /// Distance along the ray to the first surface crossing.
    pub distance: f32,
}

/// Distance along `ray` to the sphere, or None if it misses.
/// A ray starting inside the sphere hits at its exit point.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Find the nearest candidate the ray intersects.
/// On equal distances the earlier candidate wins.
pub fn pick(ray: &Ray, candidates: &[Body]) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (index, body) in candidates.iter().enumerate() {
        let Some(distance) = intersect_sphere(ray, body.position(), body.radius) else {
            continue;
        };
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(PickHit { index, distance });
        }
    }
    best
}

/// Pick through a pointer position in NDC. A camera with no valid view
/// direction picks nothing.
pub fn pick_ndc(ndc: Vec2, camera: &Camera3D, candidates: &[Body]) -> Option<PickHit> {
    let ray = camera.ray_from_ndc(ndc)?;
    pick(&ray, candidates)
}
