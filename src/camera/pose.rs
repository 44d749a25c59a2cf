use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Horizontal length below which a direction counts as vertical.
const FLAT_EPSILON: f32 = 1e-4;

/// Camera position and yaw/pitch orientation.
///
/// Orientation is a rotation about world +Y by `yaw`, then about the local
/// +X axis by `pitch`. The camera looks along local +Z, so with both angles
/// at zero it faces world +Z; positive pitch tilts the view down toward the
/// board and positive yaw turns it toward +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Heading in degrees.
    pub yaw: f32,
    /// Downward tilt in degrees.
    pub pitch: f32,
}

impl Default for Pose {
    /// Above the near edge of the default 30x30 board, looking at its
    /// near-middle.
    fn default() -> Self {
        Self::new(Vec3::new(15.0, 10.0, -10.0), 0.0, 45.0)
    }
}

impl Pose {
    /// Pose from a position and angles in degrees.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Pose at `position` facing `target`.
    ///
    /// Returns a level pose facing +Z when the two points coincide.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let dir = (target - position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return Self::new(position, 0.0, 0.0);
        }
        let pitch = (-dir.y).clamp(-1.0, 1.0).asin().to_degrees();
        let yaw = dir.x.atan2(dir.z).to_degrees();
        Self::new(position, yaw, pitch)
    }

    /// Rotation built from the yaw and pitch angles.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        orientation(self.yaw, self.pitch)
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    /// Unit screen-right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Unit screen-up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    /// View direction projected onto the ground plane.
    ///
    /// Falls back to the yaw heading when looking straight up or down.
    #[must_use]
    pub fn flat_forward(&self) -> Vec3 {
        let f = self.forward();
        let flat = Vec3::new(f.x, 0.0, f.z);
        if flat.length_squared() < FLAT_EPSILON * FLAT_EPSILON {
            return orientation(self.yaw, 0.0) * Vec3::Z;
        }
        flat.normalize()
    }

    /// Right direction projected onto the ground plane.
    #[must_use]
    pub fn flat_right(&self) -> Vec3 {
        let r = self.right();
        let flat = Vec3::new(r.x, 0.0, r.z);
        if flat.length_squared() < FLAT_EPSILON * FLAT_EPSILON {
            return orientation(self.yaw, 0.0) * Vec3::X;
        }
        flat.normalize()
    }

    /// World-to-view matrix.
    ///
    /// The +Z-forward, +X-right, +Y-up basis is left-handed, hence the
    /// `_lh` variant.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.up())
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.yaw.is_finite() && self.pitch.is_finite()
    }

    /// Whether two poses match within `eps` on every component.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.position.abs_diff_eq(other.position, eps)
            && (self.yaw - other.yaw).abs() <= eps
            && (self.pitch - other.pitch).abs() <= eps
    }
}

/// Rotation for yaw/pitch angles in degrees.
#[must_use]
pub fn orientation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
}

/// Perspective projection parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 500.0,
        }
    }
}

impl Lens {
    /// Projection matrix matching [`Pose::view_matrix`].
    ///
    /// `perspective_lh` already uses the [0,1] depth range.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }

    /// Combined view-projection matrix for a pose.
    #[must_use]
    pub fn view_projection(&self, pose: &Pose, aspect: f32) -> Mat4 {
        self.projection(aspect) * pose.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4Swizzles;

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn zero_angles_face_plus_z() {
        let pose = Pose::new(Vec3::ZERO, 0.0, 0.0);
        assert!(pose.forward().abs_diff_eq(Vec3::Z, EPS));
        assert!(pose.right().abs_diff_eq(Vec3::X, EPS));
        assert!(pose.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn positive_pitch_looks_down() {
        let pose = Pose::new(Vec3::ZERO, 0.0, 45.0);
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(pose.forward().abs_diff_eq(Vec3::new(0.0, -h, h), EPS));
    }

    #[test]
    fn positive_yaw_turns_toward_plus_x() {
        let pose = Pose::new(Vec3::ZERO, 90.0, 0.0);
        assert!(pose.forward().abs_diff_eq(Vec3::X, EPS));
        assert!(pose.right().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn looking_at_recovers_angles() {
        let pose = Pose::looking_at(
            Vec3::new(15.0, 10.0, -10.0),
            Vec3::new(15.0, 0.0, 0.0),
        );
        assert!((pose.yaw).abs() < 1e-4);
        assert!((pose.pitch - 45.0).abs() < 1e-4);

        let pose = Pose::looking_at(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!((pose.yaw - 90.0).abs() < 1e-4);
        assert_eq!(Pose::looking_at(Vec3::ONE, Vec3::ONE).pitch, 0.0);
    }

    #[test]
    fn flat_vectors_survive_straight_down_view() {
        let pose = Pose::new(Vec3::ZERO, 0.0, 90.0);
        assert!(pose.flat_forward().abs_diff_eq(Vec3::Z, 1e-4));
        assert!(pose.flat_right().abs_diff_eq(Vec3::X, 1e-4));
    }

    #[test]
    fn view_matrix_puts_target_in_front() {
        let pose = Pose::default();
        let target = pose.position + pose.forward() * 10.0;
        let in_view = pose.view_matrix() * target.extend(1.0);
        assert!(in_view.xy().abs_diff_eq(glam::Vec2::ZERO, 1e-4));
        assert!((in_view.z - 10.0).abs() < 1e-4);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let lens = Lens::default();
        let clip = lens.projection(1.0) * Vec3::new(0.0, 0.0, lens.znear).extend(1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
        let vp = lens.view_projection(&Pose::default(), 1.5);
        assert!(vp.is_finite());
    }
}
