//! Touch gesture recognition.
//!
//! [`TouchTracker`] turns the per-frame touch list into at most one drag
//! and one pinch/twist, after filtering out fingers that belong to the
//! on-screen joystick.

use glam::Vec2;
use rustc_hash::FxHashSet;

use crate::input::{JoystickSample, TouchPhase, TouchSample};

/// Which fingers the camera is currently following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    /// No camera finger is down.
    #[default]
    Idle,
    /// One finger drives single-touch rotate or pan.
    Tracking(u64),
    /// Two or more fingers are down; `suspended` is the finger that was
    /// tracked before the others arrived.
    MultiTouch {
        /// Finger to resume tracking when the others lift.
        suspended: Option<u64>,
    },
}

/// Gestures recognized in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchGestures {
    /// Single-finger movement (pixels, y up).
    pub drag: Option<Vec2>,
    /// Change in distance between two fingers (pixels, positive = spread).
    pub pinch: Option<f32>,
    /// Average horizontal movement of two fingers swiping the same way.
    pub twist: Option<f32>,
}

/// Touch state machine keyed by finger id.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    state: TouchState,
    /// Fingers claimed by the joystick without a reported owner id.
    joystick_fingers: FxHashSet<u64>,
}

impl TouchTracker {
    /// Tracker with no fingers down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Advance one frame.
    pub fn update(
        &mut self,
        touches: &[TouchSample],
        joystick: &JoystickSample,
    ) -> TouchGestures {
        let down: Vec<&TouchSample> = touches
            .iter()
            .filter(|touch| !self.claim_for_joystick(touch, joystick))
            .filter(|touch| !touch.phase.is_finished())
            .collect();
        self.forget_lifted(touches);

        let next = match (self.state, down.as_slice()) {
            (_, []) => TouchState::Idle,
            (TouchState::Tracking(id), [only]) if only.id == id => {
                let mut gestures = TouchGestures::default();
                if only.delta != Vec2::ZERO {
                    gestures.drag = Some(only.delta);
                }
                return gestures;
            }
            (TouchState::MultiTouch { suspended }, [only]) => {
                if suspended == Some(only.id) {
                    log::debug!("touch tracking resumed for finger {}", only.id);
                }
                TouchState::Tracking(only.id)
            }
            (_, [only]) => TouchState::Tracking(only.id),
            (TouchState::Tracking(id), _) => {
                TouchState::MultiTouch { suspended: Some(id) }
            }
            (TouchState::Idle, _) => TouchState::MultiTouch { suspended: None },
            (state @ TouchState::MultiTouch { .. }, _) => state,
        };
        self.transition(next);

        match down.as_slice() {
            [a, b] => two_finger_gestures(a, b),
            _ => TouchGestures::default(),
        }
    }

    /// Whether `touch` belongs to the joystick this frame.
    fn claim_for_joystick(
        &mut self,
        touch: &TouchSample,
        joystick: &JoystickSample,
    ) -> bool {
        if joystick.finger == Some(touch.id)
            || self.joystick_fingers.contains(&touch.id)
        {
            return true;
        }
        let unknown_owner = joystick.dragging && joystick.finger.is_none();
        if unknown_owner && touch.phase == TouchPhase::Started {
            let _ = self.joystick_fingers.insert(touch.id);
            return true;
        }
        false
    }

    fn forget_lifted(&mut self, touches: &[TouchSample]) {
        self.joystick_fingers.retain(|id| {
            touches
                .iter()
                .any(|touch| touch.id == *id && !touch.phase.is_finished())
        });
    }

    fn transition(&mut self, next: TouchState) {
        if next != self.state {
            log::debug!("touch state {:?} -> {next:?}", self.state);
            self.state = next;
        }
    }
}

fn two_finger_gestures(a: &TouchSample, b: &TouchSample) -> TouchGestures {
    let before = a.previous_position().distance(b.previous_position());
    let after = a.position.distance(b.position);
    let separation_change = after - before;

    let horizontal = |d: Vec2| d.x.abs() > d.y.abs();
    let twist = (horizontal(a.delta)
        && horizontal(b.delta)
        && a.delta.x.signum() == b.delta.x.signum())
    .then(|| (a.delta.x + b.delta.x) / 2.0);

    TouchGestures {
        drag: None,
        pinch: (separation_change != 0.0).then_some(separation_change),
        twist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, position: Vec2, delta: Vec2) -> TouchSample {
        TouchSample {
            id,
            phase,
            position,
            delta,
        }
    }

    fn no_joystick() -> JoystickSample {
        JoystickSample::default()
    }

    #[test]
    fn single_finger_drags_after_it_starts() {
        let mut tracker = TouchTracker::new();
        let start = [touch(1, TouchPhase::Started, Vec2::ZERO, Vec2::ZERO)];
        assert_eq!(tracker.update(&start, &no_joystick()), TouchGestures::default());
        assert_eq!(tracker.state(), TouchState::Tracking(1));

        let step = Vec2::new(3.0, 4.0);
        let moved = [touch(1, TouchPhase::Moved, step, step)];
        let gestures = tracker.update(&moved, &no_joystick());
        assert_eq!(gestures.drag, Some(Vec2::new(3.0, 4.0)));

        let ended = [touch(1, TouchPhase::Ended, Vec2::new(3.0, 4.0), Vec2::ZERO)];
        assert_eq!(tracker.update(&ended, &no_joystick()).drag, None);
        assert_eq!(tracker.state(), TouchState::Idle);
    }

    #[test]
    fn twist_averages_horizontal_swipes() {
        let mut tracker = TouchTracker::new();
        let touches = [
            touch(1, TouchPhase::Moved, Vec2::new(104.0, 101.0), Vec2::new(4.0, 1.0)),
            touch(2, TouchPhase::Moved, Vec2::new(204.0, 99.0), Vec2::new(4.0, -1.0)),
        ];
        let gestures = tracker.update(&touches, &no_joystick());
        assert_eq!(gestures.twist, Some(4.0));
        assert_eq!(gestures.drag, None);
    }

    #[test]
    fn vertical_swipes_do_not_twist() {
        let mut tracker = TouchTracker::new();
        let touches = [
            touch(1, TouchPhase::Moved, Vec2::new(0.0, 5.0), Vec2::new(1.0, 5.0)),
            touch(2, TouchPhase::Moved, Vec2::new(50.0, 5.0), Vec2::new(1.0, 5.0)),
        ];
        assert_eq!(tracker.update(&touches, &no_joystick()).twist, None);
    }

    #[test]
    fn opposite_swipes_do_not_twist() {
        let mut tracker = TouchTracker::new();
        let touches = [
            touch(1, TouchPhase::Moved, Vec2::new(-5.0, 0.0), Vec2::new(-5.0, 0.0)),
            touch(2, TouchPhase::Moved, Vec2::new(55.0, 0.0), Vec2::new(5.0, 0.0)),
        ];
        let gestures = tracker.update(&touches, &no_joystick());
        assert_eq!(gestures.twist, None);
        assert_eq!(gestures.pinch, Some(10.0));
    }

    #[test]
    fn pinch_reports_separation_change() {
        let mut tracker = TouchTracker::new();
        let touches = [
            touch(1, TouchPhase::Moved, Vec2::new(0.0, 0.0), Vec2::new(0.0, 5.0)),
            touch(2, TouchPhase::Moved, Vec2::new(0.0, 30.0), Vec2::new(0.0, -5.0)),
        ];
        // Previous separation 40, now 30.
        let gestures = tracker.update(&touches, &no_joystick());
        assert_eq!(gestures.pinch, Some(-10.0));
    }

    #[test]
    fn second_finger_suspends_and_resume_emits_nothing() {
        let mut tracker = TouchTracker::new();
        let _ = tracker.update(
            &[touch(1, TouchPhase::Started, Vec2::ZERO, Vec2::ZERO)],
            &no_joystick(),
        );
        let _ = tracker.update(
            &[
                touch(1, TouchPhase::Stationary, Vec2::ZERO, Vec2::ZERO),
                touch(2, TouchPhase::Started, Vec2::ONE, Vec2::ZERO),
            ],
            &no_joystick(),
        );
        assert_eq!(
            tracker.state(),
            TouchState::MultiTouch { suspended: Some(1) }
        );

        let resumed = tracker.update(
            &[
                touch(1, TouchPhase::Moved, Vec2::new(9.0, 0.0), Vec2::new(9.0, 0.0)),
                touch(2, TouchPhase::Ended, Vec2::ONE, Vec2::ZERO),
            ],
            &no_joystick(),
        );
        assert_eq!(tracker.state(), TouchState::Tracking(1));
        assert_eq!(resumed.drag, None);

        let moved = tracker.update(
            &[touch(1, TouchPhase::Moved, Vec2::new(10.0, 0.0), Vec2::X)],
            &no_joystick(),
        );
        assert_eq!(moved.drag, Some(Vec2::X));
    }

    #[test]
    fn lifting_suspended_finger_tracks_the_other() {
        let mut tracker = TouchTracker::new();
        let _ = tracker.update(
            &[touch(1, TouchPhase::Started, Vec2::ZERO, Vec2::ZERO)],
            &no_joystick(),
        );
        let _ = tracker.update(
            &[
                touch(1, TouchPhase::Stationary, Vec2::ZERO, Vec2::ZERO),
                touch(2, TouchPhase::Started, Vec2::ONE, Vec2::ZERO),
            ],
            &no_joystick(),
        );
        let _ = tracker.update(
            &[
                touch(1, TouchPhase::Ended, Vec2::ZERO, Vec2::ZERO),
                touch(2, TouchPhase::Stationary, Vec2::ONE, Vec2::ZERO),
            ],
            &no_joystick(),
        );
        assert_eq!(tracker.state(), TouchState::Tracking(2));
    }

    #[test]
    fn joystick_finger_is_ignored() {
        let mut tracker = TouchTracker::new();
        let joystick = JoystickSample {
            axis: Vec2::Y,
            dragging: true,
            finger: Some(7),
        };
        let touches =
            [touch(7, TouchPhase::Moved, Vec2::splat(5.0), Vec2::new(5.0, 0.0))];
        assert_eq!(tracker.update(&touches, &joystick), TouchGestures::default());
        assert_eq!(tracker.state(), TouchState::Idle);
    }

    #[test]
    fn touch_starting_during_anonymous_drag_stays_claimed() {
        let mut tracker = TouchTracker::new();
        let dragging = JoystickSample {
            axis: Vec2::X,
            dragging: true,
            finger: None,
        };
        let _ = tracker.update(
            &[touch(3, TouchPhase::Started, Vec2::ZERO, Vec2::ZERO)],
            &dragging,
        );
        assert_eq!(tracker.state(), TouchState::Idle);

        // Still claimed after the widget stops reporting a drag.
        let gestures = tracker.update(
            &[touch(3, TouchPhase::Moved, Vec2::X, Vec2::X)],
            &JoystickSample::default(),
        );
        assert_eq!(gestures.drag, None);
        assert_eq!(tracker.state(), TouchState::Idle);

        // Released once the finger lifts; a fresh finger is a camera finger.
        let _ = tracker.update(
            &[touch(3, TouchPhase::Ended, Vec2::X, Vec2::ZERO)],
            &JoystickSample::default(),
        );
        let _ = tracker.update(
            &[touch(3, TouchPhase::Started, Vec2::ZERO, Vec2::ZERO)],
            &JoystickSample::default(),
        );
        assert_eq!(tracker.state(), TouchState::Tracking(3));
    }

    #[test]
    fn camera_finger_keeps_working_while_joystick_drags() {
        let mut tracker = TouchTracker::new();
        let _ = tracker.update(
            &[touch(1, TouchPhase::Started, Vec2::ZERO, Vec2::ZERO)],
            &no_joystick(),
        );
        let dragging = JoystickSample {
            axis: Vec2::X,
            dragging: true,
            finger: None,
        };
        let gestures = tracker.update(
            &[
                touch(1, TouchPhase::Moved, Vec2::Y, Vec2::Y),
                touch(2, TouchPhase::Started, Vec2::ONE, Vec2::ZERO),
            ],
            &dragging,
        );
        assert_eq!(tracker.state(), TouchState::Tracking(1));
        assert_eq!(gestures.drag, Some(Vec2::Y));
    }
}
