use crate::grid::planner::{TileGrid, TilePosition};

/// Seam band between two adjacent tiles on one axis.
///
/// `start..end` is the band interval already clamped to the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SeamBand {
    /// Overlap midpoint of the two tiles, floored.
    pub center: u32,
    /// Half of the requested seam width, floored.
    pub half_width: u32,
    /// First pixel inside the band.
    pub start: u32,
    /// One past the last pixel inside the band.
    pub end: u32, // exclusive
}

impl SeamBand {
    /// Band for the seam between `a` and its successor `b` on an axis of `length` pixels.
    pub fn between(a: TilePosition, b: TilePosition, half_width: u32, length: u32) -> Self {
        let (ovl_start, ovl_end) = a.overlap_with(b);
        // Midpoint of the true overlap, not a stride multiple: the last tile
        // is usually shifted back from its nominal position.
        let center = ovl_start + (ovl_end - ovl_start) / 2;
        let start = center.saturating_sub(half_width);
        let end = center.saturating_add(half_width).min(length);
        Self {
            center,
            half_width,
            start,
            end: end.max(start),
        }
    }

    /// Band width in pixels after clamping.
    pub fn width(self) -> u32 {
        self.end - self.start
    }

    /// `true` when the band covers no pixels.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// `true` when pixel `p` lies inside `[start, end)`.
    pub fn contains(self, p: u32) -> bool {
        self.start <= p && p < self.end
    }

    /// Distance from `p` to the band center.
    pub fn distance(self, p: u32) -> u32 {
        p.abs_diff(self.center)
    }
}

/// One band per adjacent tile pair, in grid order.
///
/// A single-tile grid has no seams.
pub fn locate(grid: &TileGrid, seam_width: u32) -> Vec<SeamBand> {
    locate_with_halfwidth(grid, seam_width / 2)
}

/// [`locate`] with an explicit half-width.
pub fn locate_with_halfwidth(grid: &TileGrid, half_width: u32) -> Vec<SeamBand> {
    let bands: Vec<SeamBand> = grid
        .adjacent_pairs()
        .map(|(a, b)| SeamBand::between(a, b, half_width, grid.length))
        .collect();
    for band in &bands {
        tracing::trace!(
            center = band.center,
            start = band.start,
            end = band.end,
            "seam band"
        );
    }
    bands
}

#[cfg(test)]
#[path = "../../tests/unit/seam/locator.rs"]
mod tests;
