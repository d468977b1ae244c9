//! One-axis tile grid planning.
//!
//! [`plan_axis`] is the grid contract shared with the tile splitter: both sides
//! must produce identical boundaries for the same `(length, tile_size, overlap)`
//! triple or every seam band lands in the wrong place. Bump
//! [`GRID_CONTRACT_VERSION`] whenever the formula changes.

/// Version of the tile grid formula implemented by [`plan_axis`].
pub const GRID_CONTRACT_VERSION: u32 = 1;

/// Half-open tile interval `[start, end)` along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TilePosition {
    /// First pixel covered by the tile.
    pub start: u32,
    /// One past the last pixel covered by the tile.
    pub end: u32, // exclusive
}

impl TilePosition {
    /// Tile extent in pixels.
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    /// `true` for a zero-length interval.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Shared pixel interval with `other` as `(start, end)`.
    ///
    /// `start == end` when the tiles only touch.
    pub fn overlap_with(self, other: Self) -> (u32, u32) {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start, end.max(start))
    }
}

/// Distance between consecutive tile starts, floored to 1.
pub fn stride(tile_size: u32, overlap: u32) -> u32 {
    tile_size.saturating_sub(overlap).max(1)
}

/// Compute the tile grid along one axis.
///
/// Tiles advance by [`stride`] from 0; a tile that would run past `length` is
/// clamped backward so it ends exactly at `length`. The returned grid covers
/// `[0, length)` without gaps, starts at 0 and ends at `length`. A `length`
/// that fits in one tile yields a single tile; `length == 0` yields none.
pub fn plan_axis(length: u32, tile_size: u32, overlap: u32) -> Vec<TilePosition> {
    let tile_size = tile_size.max(1);
    let stride = stride(tile_size, overlap);

    let mut tiles = Vec::with_capacity(approx_tile_count(length, tile_size, stride));
    let mut pos = 0u32;
    while pos < length {
        let end = pos.saturating_add(tile_size).min(length);
        let start = end.saturating_sub(tile_size);
        tiles.push(TilePosition { start, end });
        if end == length {
            break;
        }
        pos += stride;
    }
    tiles
}

fn approx_tile_count(length: u32, tile_size: u32, stride: u32) -> usize {
    if length <= tile_size {
        return usize::from(length > 0);
    }
    ((length - tile_size).div_ceil(stride) + 1) as usize
}

/// Planned tile grid for one axis together with the parameters that built it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TileGrid {
    /// Axis length in pixels.
    pub length: u32,
    /// Nominal tile size.
    pub tile_size: u32,
    /// Requested overlap between neighbouring tiles.
    pub overlap: u32,
    tiles: Vec<TilePosition>,
}

impl TileGrid {
    /// Plan a grid with [`plan_axis`].
    pub fn plan(length: u32, tile_size: u32, overlap: u32) -> Self {
        Self {
            length,
            tile_size,
            overlap,
            tiles: plan_axis(length, tile_size, overlap),
        }
    }

    /// Effective stride used while planning.
    pub fn stride(&self) -> u32 {
        stride(self.tile_size.max(1), self.overlap)
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` when the axis is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in grid order.
    pub fn tiles(&self) -> &[TilePosition] {
        &self.tiles
    }

    /// Consecutive `(tile[i], tile[i + 1])` pairs in grid order.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (TilePosition, TilePosition)> + '_ {
        self.tiles.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/planner.rs"]
mod tests;
