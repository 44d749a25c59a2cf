use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = ["KeyW", "ArrowUp"]
/// rotate_left = ["KeyQ"]
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the flattened view direction.
    MoveForward,
    /// Move against the flattened view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Orbit counter-clockwise (yaw decreases).
    RotateLeft,
    /// Orbit clockwise (yaw increases).
    RotateRight,
    /// Turns a primary-button drag into a pan.
    PanModifier,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 7] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::RotateLeft,
        Self::RotateRight,
        Self::PanModifier,
    ];
}
