use glam::Vec3;

use super::bounds::BoardRect;

/// Rectangular tile grid laid out on the ground plane.
///
/// Tile `(x, y)` sits at world `(x * tile_size, 0, y * tile_size)`; the
/// grid's second axis runs along world Z. The camera only consumes the
/// rectangle the grid covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGrid {
    /// Tiles along world X.
    pub width: u32,
    /// Tiles along world Z.
    pub height: u32,
    /// Edge length of one tile in world units.
    pub tile_size: f32,
}

impl BoardGrid {
    /// Grid of unit tiles.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tile_size: 1.0,
        }
    }

    /// Ground rectangle spanned by the tile origins' grid.
    #[must_use]
    pub fn rect(&self) -> BoardRect {
        BoardRect {
            min_x: 0.0,
            max_x: self.width as f32 * self.tile_size,
            min_z: 0.0,
            max_z: self.height as f32 * self.tile_size,
        }
    }

    /// World position of a tile, or `None` outside the grid.
    #[must_use]
    pub fn tile_position(&self, x: i32, y: i32) -> Option<Vec3> {
        self.contains(x, y).then(|| {
            Vec3::new(x as f32 * self.tile_size, 0.0, y as f32 * self.tile_size)
        })
    }

    /// Scene name for a tile, or `None` outside the grid.
    #[must_use]
    pub fn tile_name(&self, x: i32, y: i32) -> Option<String> {
        self.contains(x, y).then(|| format!("Tile_{x}_{y}"))
    }

    /// Number of tiles in the grid.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl Default for BoardGrid {
    fn default() -> Self {
        Self::new(30, 30)
    }
}
