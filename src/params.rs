use crate::foundation::error::{SeamMaskError, SeamMaskResult};
use crate::raster::rasterizer::MaskMode;

/// Inclusive integer range with a step, anchored at `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamRange {
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
    /// Accepted values are `min + k * step`.
    pub step: u32,
}

impl ParamRange {
    /// `true` when `v` is in range and on step.
    pub fn accepts(self, v: u32) -> bool {
        v >= self.min && v <= self.max && (v - self.min) % self.step.max(1) == 0
    }

    /// Snap `v` into range, rounding down to the nearest step.
    pub fn clamp(self, v: u32) -> u32 {
        let v = v.clamp(self.min, self.max);
        let step = self.step.max(1);
        self.min + (v - self.min) / step * step
    }

    fn check(self, name: &str, v: u32) -> SeamMaskResult<()> {
        if self.accepts(v) {
            return Ok(());
        }
        Err(SeamMaskError::validation(format!(
            "{name} = {v} is outside {}..={} (step {})",
            self.min, self.max, self.step
        )))
    }
}

/// Accepted image width and height.
pub const IMAGE_SIZE_RANGE: ParamRange = ParamRange {
    min: 64,
    max: 16384,
    step: 1,
};
/// Accepted tile width and height.
pub const TILE_SIZE_RANGE: ParamRange = ParamRange {
    min: 64,
    max: 8192,
    step: 8,
};
/// Accepted tile overlap.
pub const OVERLAP_RANGE: ParamRange = ParamRange {
    min: 0,
    max: 4096,
    step: 1,
};
/// Accepted seam band width.
pub const SEAM_WIDTH_RANGE: ParamRange = ParamRange {
    min: 8,
    max: 512,
    step: 8,
};

/// Inputs of a seam mask generation.
///
/// Defaults match a 2048px image split into 1024px tiles with 128px overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeamMaskParams {
    /// Image width in pixels.
    pub image_width: u32,
    /// Image height in pixels.
    pub image_height: u32,
    /// Tile width of the tiled redraw pass.
    pub tile_width: u32,
    /// Tile height of the tiled redraw pass.
    pub tile_height: u32,
    /// Overlap of the tiled redraw pass, shared by both axes.
    pub overlap: u32,
    /// Width of each seam band in pixels.
    pub seam_width: u32,
    /// Band weighting.
    pub mode: MaskMode,
}

impl Default for SeamMaskParams {
    fn default() -> Self {
        Self {
            image_width: 2048,
            image_height: 2048,
            tile_width: 1024,
            tile_height: 1024,
            overlap: 128,
            seam_width: 64,
            mode: MaskMode::Binary,
        }
    }
}

impl SeamMaskParams {
    /// Reject values outside their declared range or step.
    pub fn validate(&self) -> SeamMaskResult<()> {
        IMAGE_SIZE_RANGE.check("image_width", self.image_width)?;
        IMAGE_SIZE_RANGE.check("image_height", self.image_height)?;
        TILE_SIZE_RANGE.check("tile_width", self.tile_width)?;
        TILE_SIZE_RANGE.check("tile_height", self.tile_height)?;
        OVERLAP_RANGE.check("overlap", self.overlap)?;
        SEAM_WIDTH_RANGE.check("seam_width", self.seam_width)?;
        Ok(())
    }

    /// Copy with every value snapped into its declared range.
    pub fn clamped(&self) -> Self {
        Self {
            image_width: IMAGE_SIZE_RANGE.clamp(self.image_width),
            image_height: IMAGE_SIZE_RANGE.clamp(self.image_height),
            tile_width: TILE_SIZE_RANGE.clamp(self.tile_width),
            tile_height: TILE_SIZE_RANGE.clamp(self.tile_height),
            overlap: OVERLAP_RANGE.clamp(self.overlap),
            seam_width: SEAM_WIDTH_RANGE.clamp(self.seam_width),
            mode: self.mode,
        }
    }

    /// Parse parameters from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> SeamMaskResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
