use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::BoundsOptions;

/// Optional closed interval. A missing end leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    /// Lower bound, if any.
    pub min: Option<f32>,
    /// Upper bound, if any.
    pub max: Option<f32>,
}

impl Span {
    /// Interval with no bounds on either side.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Build a span from optional ends. Reversed ends are swapped.
    #[must_use]
    pub fn new(min: Option<f32>, max: Option<f32>) -> Self {
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => Self {
                min: Some(hi),
                max: Some(lo),
            },
            _ => Self { min, max },
        }
    }

    /// Closed interval `[min, max]`.
    #[must_use]
    pub fn closed(min: f32, max: f32) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Clamp `value` into the span. Never panics, unlike `f32::clamp`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        let value = self.min.map_or(value, |lo| value.max(lo));
        self.max.map_or(value, |hi| value.min(hi))
    }

    /// Whether `value` lies inside the span (within `eps`).
    #[must_use]
    pub fn contains(&self, value: f32, eps: f32) -> bool {
        self.min.is_none_or(|lo| value >= lo - eps)
            && self.max.is_none_or(|hi| value <= hi + eps)
    }

    /// Whether neither end is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Axis-aligned playable rectangle on the ground plane (y = 0).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Board Rectangle", inline)]
pub struct BoardRect {
    /// Smallest world X of the board.
    pub min_x: f32,
    /// Largest world X of the board.
    pub max_x: f32,
    /// Smallest world Z of the board.
    pub min_z: f32,
    /// Largest world Z of the board.
    pub max_z: f32,
}

impl Default for BoardRect {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 30.0,
            min_z: 0.0,
            max_z: 30.0,
        }
    }
}

impl BoardRect {
    /// Rectangle with min/max corrected so `min <= max` on both axes.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            min_x: self.min_x.min(self.max_x),
            max_x: self.min_x.max(self.max_x),
            min_z: self.min_z.min(self.max_z),
            max_z: self.min_z.max(self.max_z),
        }
    }

    /// Geometric center on the ground plane.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min_x + self.max_x) * 0.5,
            0.0,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    /// Clamp a point's X and Z into the rectangle; Y is kept.
    #[must_use]
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.max(self.min_x).min(self.max_x),
            point.y,
            point.z.max(self.min_z).min(self.max_z),
        )
    }

    /// Whether a point's X and Z lie inside the rectangle (within `eps`).
    #[must_use]
    pub fn contains(&self, point: Vec3, eps: f32) -> bool {
        point.x >= self.min_x - eps
            && point.x <= self.max_x + eps
            && point.z >= self.min_z - eps
            && point.z <= self.max_z + eps
    }
}

/// Immutable limits the camera must respect, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardBounds {
    /// Rectangle the focal point is confined to.
    pub rect: BoardRect,
    /// Camera X range (pan box).
    pub x: Span,
    /// Camera altitude range (pan box).
    pub y: Span,
    /// Camera Z range (pan box).
    pub z: Span,
    /// Altitude range used by the legacy altitude zoom.
    pub zoom: Span,
    /// Accumulated pitch limits, degrees.
    pub pitch: Span,
    /// Accumulated yaw limits, degrees.
    pub yaw: Span,
    /// Minimum stand-off distance between camera and focal point.
    pub min_distance_to_board: f32,
}

impl Default for BoardBounds {
    fn default() -> Self {
        Self::unconstrained(BoardRect::default())
    }
}

impl BoardBounds {
    /// Bounds with only the board rectangle and the default stand-off.
    #[must_use]
    pub fn unconstrained(rect: BoardRect) -> Self {
        Self {
            rect: rect.normalized(),
            x: Span::UNBOUNDED,
            y: Span::UNBOUNDED,
            z: Span::UNBOUNDED,
            zoom: Span::UNBOUNDED,
            pitch: Span::UNBOUNDED,
            yaw: Span::UNBOUNDED,
            min_distance_to_board: BoundsOptions::DEFAULT_MIN_DISTANCE,
        }
    }

    /// Build bounds from their configuration section.
    #[must_use]
    pub fn from_options(opts: &BoundsOptions) -> Self {
        Self {
            rect: opts.board.normalized(),
            x: Span::new(opts.min_x, opts.max_x),
            y: Span::new(opts.min_y, opts.max_y),
            z: Span::new(opts.min_z, opts.max_z),
            zoom: Span::new(opts.min_zoom, opts.max_zoom),
            pitch: Span::new(opts.min_pitch, opts.max_pitch),
            yaw: Span::new(opts.min_yaw, opts.max_yaw),
            min_distance_to_board: opts.min_distance_to_board.max(0.0),
        }
    }

    /// Fixed pivot for board-center orbiting.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.rect.center()
    }

    /// Clamp a camera position into the X/Y/Z pan box.
    #[must_use]
    pub fn clamp_to_box(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            self.x.clamp(position.x),
            self.y.clamp(position.y),
            self.z.clamp(position.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_span_is_identity() {
        let span = Span::UNBOUNDED;
        assert_eq!(span.clamp(-1.0e6), -1.0e6);
        assert_eq!(span.clamp(4.5), 4.5);
        assert!(span.is_unbounded());
    }

    #[test]
    fn reversed_span_is_swapped() {
        let span = Span::closed(80.0, -80.0);
        assert_eq!(span.min, Some(-80.0));
        assert_eq!(span.clamp(200.0), 80.0);
        assert_eq!(span.clamp(-200.0), -80.0);
    }

    #[test]
    fn half_open_span_clamps_one_side() {
        let span = Span::new(Some(2.0), None);
        assert_eq!(span.clamp(-3.0), 2.0);
        assert_eq!(span.clamp(300.0), 300.0);
        assert!(span.contains(2.0, 0.0));
        assert!(!span.contains(1.0, 0.5));
    }

    #[test]
    fn rect_clamp_keeps_height() {
        let rect = BoardRect::default();
        let p = rect.clamp(Vec3::new(-4.0, 7.0, 45.0));
        assert_eq!(p, Vec3::new(0.0, 7.0, 30.0));
        assert_eq!(rect.center(), Vec3::new(15.0, 0.0, 15.0));
    }

    #[test]
    fn bounds_from_options_reads_every_limit() {
        let opts = BoundsOptions {
            min_x: Some(-5.0),
            max_x: Some(35.0),
            min_y: Some(2.0),
            max_y: Some(30.0),
            min_pitch: Some(10.0),
            max_pitch: Some(85.0),
            min_distance_to_board: -1.0,
            ..BoundsOptions::default()
        };
        let bounds = BoardBounds::from_options(&opts);
        assert_eq!(
            bounds.clamp_to_box(Vec3::new(50.0, 0.0, -100.0)),
            Vec3::new(35.0, 2.0, -100.0)
        );
        assert_eq!(bounds.pitch.clamp(90.0), 85.0);
        assert!(bounds.yaw.is_unbounded());
        assert_eq!(bounds.min_distance_to_board, 0.0);
    }
}
