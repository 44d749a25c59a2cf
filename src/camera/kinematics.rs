//! Pan, orbit, and zoom for a camera tethered to the board.
//!
//! Each operation builds a complete candidate [`Pose`], constrains it, and
//! only then replaces the current pose, so a reader never observes a
//! half-updated camera. Operations that need the focal point skip the
//! frame when the view ray does not reach the board.

use glam::{Vec2, Vec3};

use super::focal::{self, FocalPoint, FOCAL_EPSILON};
use super::pose::{orientation, Pose};
use crate::board::BoardBounds;
use crate::options::{CameraOptions, OrbitPivot, PanMode, ZoomMode};

/// Speeds and behavior modes used by [`CameraKinematics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicsConfig {
    /// Screen-drag pan speed (world units per pixel per second).
    pub pan_speed: f32,
    /// Axis pan speed (world units per second).
    pub move_speed: f32,
    /// World units of dolly per unit of zoom delta.
    pub zoom_speed: f32,
    /// Pan constraint style.
    pub pan_mode: PanMode,
    /// Orbit pivot.
    pub orbit_pivot: OrbitPivot,
    /// Zoom style.
    pub zoom_mode: ZoomMode,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self::from(&CameraOptions::default())
    }
}

impl From<&CameraOptions> for KinematicsConfig {
    fn from(opts: &CameraOptions) -> Self {
        Self {
            pan_speed: opts.pan_speed,
            move_speed: opts.keyboard_move_speed,
            zoom_speed: opts.zoom_speed,
            pan_mode: opts.pan_mode,
            orbit_pivot: opts.orbit_pivot,
            zoom_mode: opts.zoom_mode,
        }
    }
}

/// Owns the camera pose and moves it within [`BoardBounds`].
#[derive(Debug, Clone)]
pub struct CameraKinematics {
    pose: Pose,
    bounds: BoardBounds,
    config: KinematicsConfig,
}

impl CameraKinematics {
    /// Seed the controller with an initial pose.
    #[must_use]
    pub fn new(pose: Pose, bounds: BoardBounds, config: KinematicsConfig) -> Self {
        Self {
            pose,
            bounds,
            config,
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Limits the pose is kept within.
    #[must_use]
    pub fn bounds(&self) -> &BoardBounds {
        &self.bounds
    }

    /// Speeds and modes.
    #[must_use]
    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    /// Switch speeds or modes at runtime.
    pub fn set_config(&mut self, config: KinematicsConfig) {
        self.config = config;
    }

    /// Teleport to `pose`, bypassing all constraints.
    pub fn set_pose(&mut self, pose: Pose) {
        self.commit(pose);
    }

    /// Ground point currently looked at, if the view ray reaches the board.
    #[must_use]
    pub fn focal_point(&self) -> Option<FocalPoint> {
        focal::resolve(&self.pose)
    }

    // ── Pan ──

    /// Drag-pan by a screen delta in pixels (y up).
    ///
    /// The board follows the pointer: dragging right moves the camera left.
    pub fn pan_screen(&mut self, delta: Vec2, dt: f32) {
        if delta == Vec2::ZERO {
            return;
        }
        let movement = (-self.pose.flat_right() * delta.x
            - self.pose.flat_forward() * delta.y)
            * self.config.pan_speed
            * dt;
        self.translate(movement);
    }

    /// Move along a strafe axis (x = right, y = forward).
    ///
    /// The axis is limited to unit length so diagonal input is not faster.
    pub fn pan_axis(&mut self, axis: Vec2, dt: f32) {
        let axis = axis.clamp_length_max(1.0);
        if axis == Vec2::ZERO {
            return;
        }
        let movement = (self.pose.flat_forward() * axis.y
            + self.pose.flat_right() * axis.x)
            * self.config.move_speed
            * dt;
        self.translate(movement);
    }

    fn translate(&mut self, movement: Vec3) {
        let candidate = Pose {
            position: self.pose.position + movement,
            ..self.pose
        };
        let next = match self.config.pan_mode {
            PanMode::Box => self.box_clamped(candidate),
            PanMode::FocalPoint => self.focal_clamped(candidate),
        };
        self.commit(next);
    }

    fn box_clamped(&self, candidate: Pose) -> Pose {
        Pose {
            position: self.bounds.clamp_to_box(candidate.position),
            ..candidate
        }
    }

    /// Keep the candidate's focal point on the board, preserving the ray
    /// length to it.
    fn focal_clamped(&self, candidate: Pose) -> Pose {
        let Some(focal) = focal::resolve(&candidate) else {
            log::debug!("focal pan fell back to box clamp: view ray misses board");
            return self.box_clamped(candidate);
        };
        let clamped = self.bounds.rect.clamp(focal.point);
        Pose {
            position: clamped - candidate.forward() * focal.distance,
            ..candidate
        }
    }

    // ── Orbit ──

    /// Orbit by yaw/pitch deltas in degrees around the configured pivot.
    ///
    /// `yaw += delta_yaw`, `pitch -= delta_pitch`; the accumulated angles
    /// are clamped to the bounds, so repeated input saturates.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.orbit_around(self.config.orbit_pivot, delta_yaw, delta_pitch);
    }

    /// Orbit around an explicit pivot, ignoring the configured one.
    ///
    /// Either pivot needs the current view to reach the board, and the
    /// frame is skipped if the result would stop looking down at the board
    /// or sink below it.
    pub fn orbit_around(
        &mut self,
        pivot: OrbitPivot,
        delta_yaw: f32,
        delta_pitch: f32,
    ) {
        if delta_yaw == 0.0 && delta_pitch == 0.0 {
            return;
        }
        let Some(focal) = self.focal_point() else {
            log::debug!("orbit skipped: view ray misses board");
            return;
        };
        let yaw = self.bounds.yaw.clamp(self.pose.yaw + delta_yaw);
        let pitch = self.bounds.pitch.clamp(self.pose.pitch - delta_pitch);
        let forward = orientation(yaw, pitch) * Vec3::Z;
        if forward.y > -FOCAL_EPSILON {
            log::debug!("orbit skipped: pitch {pitch} would look away from board");
            return;
        }

        let next = match pivot {
            OrbitPivot::FocalPoint => {
                let pivot = self.bounds.rect.clamp(focal.point);
                Pose {
                    position: pivot - forward * focal.distance,
                    yaw,
                    pitch,
                }
            }
            OrbitPivot::BoardCenter => {
                let center = self.bounds.center();
                let rotation =
                    orientation(yaw, pitch) * self.pose.orientation().inverse();
                let position = center + rotation * (self.pose.position - center);
                Pose {
                    position: self.bounds.clamp_to_box(position),
                    yaw,
                    pitch,
                }
            }
        };
        if next.position.y < 0.0 {
            log::debug!("orbit skipped: camera would drop below board");
            return;
        }
        self.commit(next);
    }

    // ── Zoom ──

    /// Zoom by an input delta; positive `delta` approaches the board.
    ///
    /// The delta is scaled by the zoom speed, and additionally by `dt` in
    /// the legacy altitude mode.
    pub fn zoom(&mut self, delta: f32, dt: f32) {
        let distance = match self.config.zoom_mode {
            ZoomMode::FocalPoint => delta * self.config.zoom_speed,
            ZoomMode::Altitude => delta * self.config.zoom_speed * dt,
        };
        self.dolly(distance);
    }

    /// Move `distance` world units along the view ray, unscaled.
    ///
    /// Callers that already converted their input to world units (pinch)
    /// use this instead of [`Self::zoom`]. Skipped when the view ray misses
    /// the board.
    pub fn dolly(&mut self, distance: f32) {
        if distance == 0.0 {
            return;
        }
        let Some(focal) = self.focal_point() else {
            log::debug!("zoom skipped: view ray misses board");
            return;
        };
        let next = match self.config.zoom_mode {
            ZoomMode::FocalPoint => {
                let Some(next) = self.dolly_toward(focal, distance) else {
                    return;
                };
                next
            }
            ZoomMode::Altitude => {
                let p = self.pose.position + self.pose.forward() * distance;
                Pose {
                    position: Vec3::new(
                        self.bounds.x.clamp(p.x),
                        self.bounds.zoom.clamp(p.y).max(0.0),
                        self.bounds.z.clamp(p.z),
                    ),
                    ..self.pose
                }
            }
        };
        self.commit(next);
    }

    /// Saturates at the stand-off distance instead of passing through the
    /// board.
    fn dolly_toward(&self, focal: FocalPoint, distance: f32) -> Option<Pose> {
        let candidate = self
            .bounds
            .clamp_to_box(self.pose.position + self.pose.forward() * distance);
        let min_distance = self.bounds.min_distance_to_board;

        let position = if candidate.distance(focal.point) < min_distance
            || candidate.y < 0.0
        {
            let Some(approach) = (self.pose.position - focal.point).try_normalize()
            else {
                log::debug!("zoom skipped: camera sits on its focal point");
                return None;
            };
            focal.point + approach * min_distance
        } else {
            candidate
        };
        Some(Pose {
            position,
            ..self.pose
        })
    }

    fn commit(&mut self, next: Pose) {
        if next.is_finite() {
            self.pose = next;
        } else {
            log::warn!("rejected non-finite camera pose: {next:?}");
        }
    }
}
