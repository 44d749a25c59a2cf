//! Board camera: pose, focal point, constrained motion, and the per-frame
//! rig that drives it.
//!
//! Provides a yaw/pitch camera whose pan, orbit, and zoom keep the view
//! anchored on a rectangular ground-plane board.

/// Focal point resolution against the ground plane.
pub mod focal;
/// Pan, orbit, and zoom within board limits.
pub mod kinematics;
/// Camera pose and projection parameters.
pub mod pose;
/// Lock-free pose hand-off to a render thread.
pub mod publish;
/// Per-frame input fusion.
pub mod rig;
/// Touch gesture state machine.
pub mod touch;

pub use focal::FocalPoint;
pub use kinematics::{CameraKinematics, KinematicsConfig};
pub use pose::{Lens, Pose};
pub use publish::{PosePublisher, PoseReader};
pub use rig::CameraRig;
pub use touch::{TouchGestures, TouchState, TouchTracker};
