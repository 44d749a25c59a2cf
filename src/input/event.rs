use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputSampler`](super::InputSampler), which folds
/// every event of one frame into a single
/// [`InputSample`](super::InputSample). Coordinates are physical pixels
/// with y pointing down, as windowing systems report them.
///
/// Events also serialize as tagged JSON, which is the replay trace format:
/// ```json
/// {"type":"cursor_moved","x":100.0,"y":200.0}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel in lines (positive = zoom in).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code string (`"KeyW"`, `"ArrowLeft"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A finger touched, moved, or left the screen.
    Touch {
        /// Stable finger identifier for the lifetime of the contact.
        id: u64,
        /// Contact phase.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// On-screen joystick widget state.
    Joystick {
        /// Horizontal deflection in [-1, 1].
        x: f32,
        /// Vertical deflection in [-1, 1], positive = forward.
        y: f32,
        /// Whether the widget is being dragged.
        dragging: bool,
        /// Finger holding the widget, when the platform reports it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        finger: Option<u64>,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Lifecycle phase of one finger contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// Finger went down this frame.
    Started,
    /// Finger moved this frame.
    Moved,
    /// Finger is down and did not move this frame.
    Stationary,
    /// Finger lifted this frame.
    Ended,
    /// The platform cancelled the contact this frame.
    Cancelled,
}

impl TouchPhase {
    /// Whether the contact is over after this frame.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it carries camera input.
    ///
    /// Key repeats are dropped; held keys are tracked by the sampler.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(Self::MouseButton {
                    button: MouseButton::from(*button),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::Touch(touch) => Some(Self::Touch {
                id: touch.id,
                phase: TouchPhase::from(touch.phase),
                x: touch.location.x as f32,
                y: touch.location.y as f32,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_use_tagged_json() {
        let json = serde_json::to_string(&InputEvent::Scroll { delta: 1.5 })
            .unwrap();
        assert_eq!(json, r#"{"type":"scroll","delta":1.5}"#);

        let parsed: InputEvent = serde_json::from_str(
            r#"{"type":"touch","id":3,"phase":"moved","x":1.0,"y":2.0}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            InputEvent::Touch {
                id: 3,
                phase: TouchPhase::Moved,
                x: 1.0,
                y: 2.0,
            }
        );
    }

    #[test]
    fn joystick_finger_is_optional() {
        let parsed: InputEvent = serde_json::from_str(
            r#"{"type":"joystick","x":0.0,"y":1.0,"dragging":true}"#,
        )
        .unwrap();
        assert!(matches!(
            parsed,
            InputEvent::Joystick { finger: None, dragging: true, .. }
        ));
    }

    #[test]
    fn finished_phases() {
        assert!(TouchPhase::Ended.is_finished());
        assert!(TouchPhase::Cancelled.is_finished());
        assert!(!TouchPhase::Stationary.is_finished());
    }
}
