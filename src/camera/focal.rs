//! Ground-plane focal point resolution.
//!
//! The focal point is where the camera's forward ray meets the board plane
//! (y = 0). Every orbit and zoom pivots on it, and focal-point panning
//! keeps it inside the board rectangle.

use glam::Vec3;

use super::pose::Pose;

/// Below this `|forward.y|` the view ray is treated as parallel to the
/// board.
pub const FOCAL_EPSILON: f32 = 1e-4;

/// Where the view ray hits the board, and how far along the ray that is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    /// Intersection with the ground plane; `y` is exactly zero.
    pub point: Vec3,
    /// Distance from the camera to `point` along the view ray.
    pub distance: f32,
}

/// Intersect the pose's view ray with the ground plane.
///
/// Returns `None` when the ray is parallel to the board, points away from
/// it, or starts underneath it.
#[must_use]
pub fn resolve(pose: &Pose) -> Option<FocalPoint> {
    resolve_ray(pose.position, pose.forward())
}

/// Intersect an arbitrary unit ray with the ground plane.
#[must_use]
pub fn resolve_ray(origin: Vec3, forward: Vec3) -> Option<FocalPoint> {
    if forward.y.abs() < FOCAL_EPSILON || origin.y < 0.0 {
        return None;
    }
    let t = -origin.y / forward.y;
    if !t.is_finite() || t < 0.0 {
        return None;
    }
    let hit = origin + forward * t;
    Some(FocalPoint {
        point: Vec3::new(hit.x, 0.0, hit.z),
        distance: t,
    })
}
