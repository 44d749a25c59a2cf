use glam::Vec2;

use super::event::TouchPhase;

/// One finger's contribution to a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Stable finger identifier.
    pub id: u64,
    /// Phase reached during this frame.
    pub phase: TouchPhase,
    /// Position at the end of the frame (pixels, y up).
    pub position: Vec2,
    /// Movement since the previous frame (pixels, y up).
    pub delta: Vec2,
}

impl TouchSample {
    /// Position at the start of the frame.
    #[must_use]
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// On-screen joystick state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JoystickSample {
    /// Deflection inside the unit disk, y positive = forward.
    pub axis: Vec2,
    /// Whether the widget is being dragged.
    pub dragging: bool,
    /// Finger that owns the widget, when known.
    pub finger: Option<u64>,
}

impl JoystickSample {
    /// Deflection for a pointer `offset` from the widget center.
    ///
    /// The handle travel is limited to `radius`, so the result always lies
    /// in the unit disk. A non-positive radius yields no deflection.
    #[must_use]
    pub fn axis_from_offset(offset: Vec2, radius: f32) -> Vec2 {
        if radius <= 0.0 {
            return Vec2::ZERO;
        }
        let distance = offset.length().min(radius);
        offset.normalize_or_zero() * (distance / radius)
    }
}

/// Everything the camera needs to know about one frame of input.
///
/// A pure value: all fields default to zero/false/empty when nothing is
/// active. Screen-space y points up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSample {
    /// Keyboard strafe axis; x = right, y = forward, components in [-1, 1].
    pub move_axis: Vec2,
    /// Rotate-left key held.
    pub rotate_left: bool,
    /// Rotate-right key held.
    pub rotate_right: bool,
    /// Accumulated mouse-drag pan (pixels).
    pub pan_delta: Vec2,
    /// Accumulated mouse-drag orbit (pixels).
    pub orbit_delta: Vec2,
    /// Accumulated wheel movement (lines, positive = toward the board).
    pub zoom_delta: f32,
    /// Fingers touched this frame, in contact order.
    pub touches: Vec<TouchSample>,
    /// Joystick widget state.
    pub joystick: JoystickSample,
}

impl InputSample {
    /// Whether no channel carries input this frame.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.move_axis == Vec2::ZERO
            && !self.rotate_left
            && !self.rotate_right
            && self.pan_delta == Vec2::ZERO
            && self.orbit_delta == Vec2::ZERO
            && self.zoom_delta == 0.0
            && self.touches.is_empty()
            && !self.joystick.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_is_idle() {
        assert!(InputSample::default().is_idle());
        let sample = InputSample {
            rotate_left: true,
            ..InputSample::default()
        };
        assert!(!sample.is_idle());
    }

    #[test]
    fn joystick_axis_saturates_at_radius() {
        let axis = JoystickSample::axis_from_offset(Vec2::new(300.0, 0.0), 100.0);
        assert_eq!(axis, Vec2::X);

        let axis = JoystickSample::axis_from_offset(Vec2::new(0.0, -50.0), 100.0);
        assert!((axis - Vec2::new(0.0, -0.5)).length() < 1e-6);

        assert_eq!(
            JoystickSample::axis_from_offset(Vec2::ONE, 0.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn previous_position_undoes_delta() {
        let touch = TouchSample {
            id: 0,
            phase: TouchPhase::Moved,
            position: Vec2::new(10.0, 5.0),
            delta: Vec2::new(4.0, -1.0),
        };
        assert_eq!(touch.previous_position(), Vec2::new(6.0, 6.0));
    }
}
