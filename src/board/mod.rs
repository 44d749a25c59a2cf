//! Board geometry: the playable rectangle and the limits the camera obeys.

/// Rectangle, spans, and the immutable [`BoardBounds`] limit set.
pub mod bounds;
/// Tile grid that produces the board rectangle.
pub mod grid;

pub use bounds::{BoardBounds, BoardRect, Span};
pub use grid::BoardGrid;
