use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How panning keeps the camera on the board.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PanMode {
    /// Clamp the camera position itself to the pan box.
    Box,
    /// Clamp the looked-at ground point to the board rectangle.
    #[default]
    FocalPoint,
}

/// Point the camera orbits around.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OrbitPivot {
    /// Fixed geometric center of the board.
    BoardCenter,
    /// Ground point the camera currently looks at.
    #[default]
    FocalPoint,
}

/// How zoom input moves the camera.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// Dolly along the view ray, stopping at the stand-off distance.
    #[default]
    FocalPoint,
    /// Dolly scaled by frame time, altitude clamped to the zoom range.
    Altitude,
}

/// What a single tracked finger drives.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SingleTouchAction {
    /// Orbit around the pivot.
    #[default]
    Rotate,
    /// Drag-pan across the board.
    Pan,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera sensitivity, behavior modes, and projection parameters.
pub struct CameraOptions {
    /// Screen-drag pan speed (world units per pixel per second).
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub pan_speed: f32,
    /// Keyboard and joystick move speed (world units per second).
    #[schemars(title = "Move Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub keyboard_move_speed: f32,
    /// World units travelled per wheel line (per line per second in
    /// altitude zoom).
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Degrees of orbit per pixel of mouse drag or two-finger twist.
    #[schemars(title = "Rotate Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub rotation_speed: f32,
    /// Degrees per second while a rotate key is held.
    #[schemars(title = "Key Rotate Speed", range(min = 5.0, max = 360.0), extend("step" = 5.0))]
    pub keyboard_rotation_speed: f32,
    /// World units of dolly per pixel of pinch.
    #[schemars(title = "Pinch Zoom Speed", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub pinch_zoom_speed: f32,
    /// Degrees of orbit per pixel of single-finger drag.
    #[schemars(title = "Touch Rotate Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub mobile_rotation_sensitivity: f32,
    /// Pan constraint style.
    #[schemars(title = "Pan Mode")]
    pub pan_mode: PanMode,
    /// Orbit pivot.
    #[schemars(title = "Orbit Pivot")]
    pub orbit_pivot: OrbitPivot,
    /// Zoom style.
    #[schemars(title = "Zoom Mode")]
    pub zoom_mode: ZoomMode,
    /// Single-finger gesture.
    #[schemars(title = "Single Touch")]
    pub single_touch: SingleTouchAction,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            pan_speed: 2.0,
            keyboard_move_speed: 10.0,
            zoom_speed: 1.0,
            rotation_speed: 0.25,
            keyboard_rotation_speed: 50.0,
            pinch_zoom_speed: 0.05,
            mobile_rotation_sensitivity: 0.2,
            pan_mode: PanMode::default(),
            orbit_pivot: OrbitPivot::default(),
            zoom_mode: ZoomMode::default(),
            single_touch: SingleTouchAction::default(),
            fovy: 60.0,
            znear: 0.1,
            zfar: 500.0,
        }
    }
}
