use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::BoardRect;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounds", inline)]
#[serde(default)]
/// Board rectangle plus optional camera limits.
///
/// Every limit left out of a preset is unbounded, which gives the
/// free-fly behavior.
pub struct BoundsOptions {
    /// Ground rectangle the focal point is confined to.
    #[schemars(skip)]
    pub board: BoardRect,
    /// Lowest altitude for altitude zoom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f32>,
    /// Highest altitude for altitude zoom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,
    /// Smallest camera X.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_x: Option<f32>,
    /// Largest camera X.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_x: Option<f32>,
    /// Smallest camera altitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f32>,
    /// Largest camera altitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f32>,
    /// Smallest camera Z.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_z: Option<f32>,
    /// Largest camera Z.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_z: Option<f32>,
    /// Shallowest pitch in degrees (0 = level, 90 = straight down).
    #[schemars(title = "Min Pitch")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pitch: Option<f32>,
    /// Steepest pitch in degrees.
    #[schemars(title = "Max Pitch")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pitch: Option<f32>,
    /// Leftmost yaw in degrees.
    #[schemars(title = "Min Yaw")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_yaw: Option<f32>,
    /// Rightmost yaw in degrees.
    #[schemars(title = "Max Yaw")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_yaw: Option<f32>,
    /// Closest the camera may get to its focal point.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub min_distance_to_board: f32,
}

impl BoundsOptions {
    /// Stand-off distance used when none is configured.
    pub const DEFAULT_MIN_DISTANCE: f32 = 5.0;
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            board: BoardRect::default(),
            min_zoom: None,
            max_zoom: None,
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
            min_z: None,
            max_z: None,
            min_pitch: None,
            max_pitch: None,
            min_yaw: None,
            max_yaw: None,
            min_distance_to_board: Self::DEFAULT_MIN_DISTANCE,
        }
    }
}
