//! Folds raw platform events into one [`InputSample`] per frame.
//!
//! The `InputSampler` owns all transient input state (held keys and
//! buttons, cursor tracking, per-finger records, the joystick widget) and
//! the key-binding map. It is the only thing that sits between raw window
//! events and [`CameraRig::update`](crate::camera::CameraRig::update).

use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};

use super::event::{InputEvent, MouseButton, TouchPhase};
use super::keyboard::KeyAction;
use super::sample::{InputSample, JoystickSample, TouchSample};
use crate::options::KeybindingOptions;

/// Per-finger bookkeeping between frames.
#[derive(Debug, Clone, Copy)]
struct FingerRecord {
    /// Latest position (pixels, y up).
    position: Vec2,
    /// Position when the current frame started.
    frame_start: Vec2,
    /// Phase reached this frame; `None` = no event yet this frame.
    phase: Option<TouchPhase>,
}

/// Mouse buttons currently held.
#[derive(Debug, Clone, Copy, Default)]
struct HeldButtons {
    left: bool,
    right: bool,
    middle: bool,
}

/// Converts raw input events into per-frame [`InputSample`]s.
///
/// # Usage
///
/// ```
/// use boardcam::input::{InputEvent, InputSampler};
///
/// let mut sampler = InputSampler::new();
/// sampler.handle_event(&InputEvent::Scroll { delta: 1.0 });
/// let sample = sampler.sample();
/// assert_eq!(sample.zoom_delta, 1.0);
/// assert_eq!(sampler.sample().zoom_delta, 0.0);
/// ```
pub struct InputSampler {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Physical keys currently down.
    held_keys: FxHashSet<String>,
    /// Shift state reported through modifier events.
    shift_pressed: bool,
    buttons: HeldButtons,
    /// Last cursor position in platform pixels (y down).
    last_cursor: Option<Vec2>,
    pan_delta: Vec2,
    orbit_delta: Vec2,
    zoom_delta: f32,
    fingers: FxHashMap<u64, FingerRecord>,
    /// Finger ids in contact order.
    finger_order: Vec<u64>,
    joystick: JoystickSample,
}

impl InputSampler {
    /// Create a new sampler with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a sampler with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            held_keys: FxHashSet::default(),
            shift_pressed: false,
            buttons: HeldButtons::default(),
            last_cursor: None,
            pan_delta: Vec2::ZERO,
            orbit_delta: Vec2::ZERO,
            zoom_delta: 0.0,
            fingers: FxHashMap::default(),
            finger_order: Vec::new(),
            joystick: JoystickSample::default(),
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Number of fingers currently in contact.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.finger_order.len()
    }

    /// Forget held keys, buttons, and fingers (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.shift_pressed = false;
        self.buttons = HeldButtons::default();
        self.fingers.clear();
        self.finger_order.clear();
        self.joystick = JoystickSample::default();
    }

    /// Fold one raw event into the current frame.
    ///
    /// Events carrying non-finite coordinates are dropped.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if !is_finite_event(event) {
            log::warn!("dropping non-finite input event: {event:?}");
            return;
        }
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(*x, *y));
            }
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => self.buttons.left = *pressed,
                MouseButton::Right => self.buttons.right = *pressed,
                MouseButton::Middle => self.buttons.middle = *pressed,
            },
            InputEvent::Scroll { delta } => self.zoom_delta += *delta,
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = *shift;
            }
            InputEvent::Key { code, pressed } => {
                if *pressed {
                    let _ = self.held_keys.insert(code.clone());
                } else {
                    let _ = self.held_keys.remove(code);
                }
            }
            InputEvent::Touch { id, phase, x, y } => {
                self.handle_touch(*id, *phase, Vec2::new(*x, -*y));
            }
            InputEvent::Joystick {
                x,
                y,
                dragging,
                finger,
            } => {
                self.joystick = JoystickSample {
                    axis: Vec2::new(*x, *y).clamp_length_max(1.0),
                    dragging: *dragging,
                    finger: *finger,
                };
            }
        }
    }

    /// Snapshot this frame's input and start the next frame.
    ///
    /// Per-frame deltas are reset; held keys, buttons, fingers, and the
    /// joystick state carry over.
    pub fn sample(&mut self) -> InputSample {
        let move_axis = Vec2::new(
            self.axis(KeyAction::MoveRight, KeyAction::MoveLeft),
            self.axis(KeyAction::MoveForward, KeyAction::MoveBackward),
        );

        let touches = self
            .finger_order
            .iter()
            .filter_map(|id| {
                self.fingers.get(id).map(|rec| {
                    let phase = rec.phase.unwrap_or(TouchPhase::Stationary);
                    let delta = if phase == TouchPhase::Started {
                        Vec2::ZERO
                    } else {
                        rec.position - rec.frame_start
                    };
                    TouchSample {
                        id: *id,
                        phase,
                        position: rec.position,
                        delta,
                    }
                })
            })
            .collect();

        let sample = InputSample {
            move_axis,
            rotate_left: self.action_held(KeyAction::RotateLeft),
            rotate_right: self.action_held(KeyAction::RotateRight),
            pan_delta: std::mem::take(&mut self.pan_delta),
            orbit_delta: std::mem::take(&mut self.orbit_delta),
            zoom_delta: std::mem::take(&mut self.zoom_delta),
            touches,
            joystick: self.joystick,
        };

        self.end_touch_frame();
        sample
    }

    /// Cursor moved — accumulate the delta into pan or orbit.
    fn handle_cursor_moved(&mut self, position: Vec2) {
        let raw = self
            .last_cursor
            .map_or(Vec2::ZERO, |last| position - last);
        self.last_cursor = Some(position);
        let delta = Vec2::new(raw.x, -raw.y);

        let pan_modifier =
            self.shift_pressed || self.action_held(KeyAction::PanModifier);
        if self.buttons.middle || (self.buttons.left && pan_modifier) {
            self.pan_delta += delta;
        }
        if self.buttons.right {
            self.orbit_delta += delta;
        }
    }

    fn handle_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        let known = self.fingers.contains_key(&id);
        match phase {
            TouchPhase::Started => self.begin_finger(id, position),
            TouchPhase::Moved | TouchPhase::Stationary if !known => {
                log::debug!("touch {id} moved before it started");
                self.begin_finger(id, position);
            }
            TouchPhase::Moved | TouchPhase::Stationary => {
                if let Some(rec) = self.fingers.get_mut(&id) {
                    rec.position = position;
                    if phase == TouchPhase::Moved && rec.phase.is_none() {
                        rec.phase = Some(TouchPhase::Moved);
                    }
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if let Some(rec) = self.fingers.get_mut(&id) {
                    rec.position = position;
                    rec.phase = Some(phase);
                }
            }
        }
    }

    fn begin_finger(&mut self, id: u64, position: Vec2) {
        let previous = self.fingers.insert(
            id,
            FingerRecord {
                position,
                frame_start: position,
                phase: Some(TouchPhase::Started),
            },
        );
        if previous.is_none() {
            self.finger_order.push(id);
        }
    }

    /// Drop finished fingers and rebase the rest for the next frame.
    fn end_touch_frame(&mut self) {
        let fingers = &mut self.fingers;
        self.finger_order.retain(|id| {
            let finished = fingers
                .get(id)
                .and_then(|rec| rec.phase)
                .is_some_and(TouchPhase::is_finished);
            if finished {
                let _ = fingers.remove(id);
            }
            !finished
        });
        for rec in self.fingers.values_mut() {
            rec.frame_start = rec.position;
            rec.phase = None;
        }
    }

    fn action_held(&self, action: KeyAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.key_bindings.lookup(key) == Some(action))
    }

    fn axis(&self, positive: KeyAction, negative: KeyAction) -> f32 {
        let pos = if self.action_held(positive) { 1.0 } else { 0.0 };
        let neg = if self.action_held(negative) { 1.0 } else { 0.0 };
        pos - neg
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_finite_event(event: &InputEvent) -> bool {
    match event {
        InputEvent::CursorMoved { x, y }
        | InputEvent::Touch { x, y, .. }
        | InputEvent::Joystick { x, y, .. } => x.is_finite() && y.is_finite(),
        InputEvent::Scroll { delta } => delta.is_finite(),
        InputEvent::MouseButton { .. }
        | InputEvent::ModifiersChanged { .. }
        | InputEvent::Key { .. } => true,
    }
}
