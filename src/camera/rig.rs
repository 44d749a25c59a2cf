//! Per-frame driver that fuses every input channel into the camera pose.

use super::kinematics::{CameraKinematics, KinematicsConfig};
use super::pose::{Lens, Pose};
use super::publish::{pose_channel, PosePublisher, PoseReader};
use super::touch::{TouchState, TouchTracker};
use crate::board::BoardBounds;
use crate::input::InputSample;
use crate::options::{CameraOptions, Options, SingleTouchAction};

/// Gains that convert raw input units into degrees or world units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct InputGains {
    rotation_speed: f32,
    keyboard_rotation_speed: f32,
    pinch_zoom_speed: f32,
    mobile_rotation_sensitivity: f32,
    single_touch: SingleTouchAction,
}

impl From<&CameraOptions> for InputGains {
    fn from(opts: &CameraOptions) -> Self {
        Self {
            rotation_speed: opts.rotation_speed,
            keyboard_rotation_speed: opts.keyboard_rotation_speed,
            pinch_zoom_speed: opts.pinch_zoom_speed,
            mobile_rotation_sensitivity: opts.mobile_rotation_sensitivity,
            single_touch: opts.single_touch,
        }
    }
}

/// Owns the camera and advances it once per frame.
///
/// Channels are applied in a fixed order: keyboard pan, keyboard rotate,
/// mouse pan, mouse orbit, wheel zoom, single touch, pinch, twist,
/// joystick pan. Each one sees the pose left by the previous one.
///
/// ```
/// use boardcam::camera::{CameraRig, Pose};
/// use boardcam::input::InputSample;
/// use boardcam::options::Options;
/// use boardcam::util::FrameClock;
///
/// let mut clock = FrameClock::default();
/// let mut rig = CameraRig::new(&Options::default(), Pose::default());
/// let pose = rig.update(&InputSample::default(), clock.tick());
/// assert_eq!(pose, Pose::default());
/// ```
pub struct CameraRig {
    kinematics: CameraKinematics,
    touch: TouchTracker,
    gains: InputGains,
    lens: Lens,
    publisher: Option<PosePublisher>,
}

impl CameraRig {
    /// Rig bounded by `options.bounds`, starting at `initial`.
    #[must_use]
    pub fn new(options: &Options, initial: Pose) -> Self {
        Self::with_bounds(
            &options.camera,
            BoardBounds::from_options(&options.bounds),
            initial,
        )
    }

    /// Rig with explicitly built bounds (e.g. from a
    /// [`BoardGrid`](crate::board::BoardGrid)).
    #[must_use]
    pub fn with_bounds(
        camera: &CameraOptions,
        bounds: BoardBounds,
        initial: Pose,
    ) -> Self {
        Self {
            kinematics: CameraKinematics::new(
                initial,
                bounds,
                KinematicsConfig::from(camera),
            ),
            touch: TouchTracker::new(),
            gains: InputGains::from(camera),
            lens: lens_from(camera),
            publisher: None,
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        *self.kinematics.pose()
    }

    /// Projection parameters for the renderer.
    #[must_use]
    pub fn lens(&self) -> Lens {
        self.lens
    }

    /// Underlying pan/orbit/zoom controller.
    #[must_use]
    pub fn kinematics(&self) -> &CameraKinematics {
        &self.kinematics
    }

    /// Mutable controller access, e.g. to teleport the camera.
    pub fn kinematics_mut(&mut self) -> &mut CameraKinematics {
        &mut self.kinematics
    }

    /// Touch gesture state.
    #[must_use]
    pub fn touch_state(&self) -> TouchState {
        self.touch.state()
    }

    /// Swap speeds, modes, and lens without touching the pose.
    pub fn apply_options(&mut self, camera: &CameraOptions) {
        self.kinematics.set_config(KinematicsConfig::from(camera));
        self.gains = InputGains::from(camera);
        self.lens = lens_from(camera);
    }

    /// Publish every future pose to a lock-free reader.
    ///
    /// Replaces any previously attached reader. The reader starts with the
    /// current pose.
    pub fn attach_publisher(&mut self) -> PoseReader {
        let (publisher, reader) = pose_channel(self.kinematics.pose());
        self.publisher = Some(publisher);
        reader
    }

    /// Apply one frame of input and return the resulting pose.
    ///
    /// A negative or non-finite `dt` skips the frame.
    pub fn update(&mut self, sample: &InputSample, dt: f32) -> Pose {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("skipping frame with invalid dt {dt}");
            return self.pose();
        }
        let gains = self.gains;
        let kin = &mut self.kinematics;

        kin.pan_axis(sample.move_axis, dt);

        let turn = f32::from(u8::from(sample.rotate_right))
            - f32::from(u8::from(sample.rotate_left));
        kin.orbit(turn * gains.keyboard_rotation_speed * dt, 0.0);

        kin.pan_screen(sample.pan_delta, dt);
        let orbit = sample.orbit_delta * gains.rotation_speed;
        kin.orbit(orbit.x, orbit.y);
        kin.zoom(sample.zoom_delta, dt);

        let gestures = self.touch.update(&sample.touches, &sample.joystick);
        if let Some(drag) = gestures.drag {
            match gains.single_touch {
                SingleTouchAction::Rotate => {
                    let turn = drag * gains.mobile_rotation_sensitivity;
                    kin.orbit(turn.x, turn.y);
                }
                SingleTouchAction::Pan => kin.pan_screen(drag, dt),
            }
        }
        if let Some(spread) = gestures.pinch {
            kin.dolly(spread * gains.pinch_zoom_speed);
        }
        if let Some(avg) = gestures.twist {
            kin.orbit(avg * gains.rotation_speed, 0.0);
        }

        if sample.joystick.dragging {
            kin.pan_axis(sample.joystick.axis, dt);
        }

        let pose = *kin.pose();
        if let Some(publisher) = self.publisher.as_mut() {
            publisher.publish(pose);
        }
        pose
    }
}

fn lens_from(camera: &CameraOptions) -> Lens {
    Lens {
        fovy: camera.fovy,
        znear: camera.znear,
        zfar: camera.zfar,
    }
}
