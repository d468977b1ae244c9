use crate::foundation::core::{Axis, ImageSize};
use crate::grid::planner::{TileGrid, TilePosition};

/// One 2D tile as the tile splitter would cut it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TileRect {
    /// Column index in the x grid.
    pub col: usize,
    /// Row index in the y grid.
    pub row: usize,
    /// Horizontal extent.
    pub x: TilePosition,
    /// Vertical extent.
    pub y: TilePosition,
}

impl TileRect {
    /// Tile size as `(width, height)`.
    pub fn size(self) -> (u32, u32) {
        (self.x.len(), self.y.len())
    }
}

/// Both axis grids of a tiled image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TileLayout {
    /// Grid along the image width.
    pub x: TileGrid,
    /// Grid along the image height.
    pub y: TileGrid,
}

impl TileLayout {
    /// Plan both axes. A single overlap value applies to both, as in the
    /// tiled redraw pass.
    pub fn plan(size: ImageSize, tile_width: u32, tile_height: u32, overlap: u32) -> Self {
        Self {
            x: TileGrid::plan(size.width, tile_width, overlap),
            y: TileGrid::plan(size.height, tile_height, overlap),
        }
    }

    /// Grid along `axis`.
    pub fn axis(&self, axis: Axis) -> &TileGrid {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// Tiles in row-major order (rows outer, columns inner).
    pub fn rects(&self) -> impl Iterator<Item = TileRect> + '_ {
        self.y.tiles().iter().enumerate().flat_map(move |(row, &y)| {
            self.x
                .tiles()
                .iter()
                .enumerate()
                .map(move |(col, &x)| TileRect { col, row, x, y })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/layout.rs"]
mod tests;
