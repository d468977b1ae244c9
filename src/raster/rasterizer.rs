use rayon::prelude::*;

use crate::foundation::error::SeamMaskError;
use crate::raster::mask::{MASK_CHANNELS, Mask};
use crate::seam::locator::SeamBand;

/// How band pixels are weighted.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Every pixel inside a band is `1.0`, everything else `0.0`.
    #[default]
    Binary,
    /// Linear falloff from `1.0` at the band center to `0.0` at `half_width`.
    Gradient,
}

impl MaskMode {
    /// Lowercase name, as accepted by [`str::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Gradient => "gradient",
        }
    }

    fn weight_fn(self) -> fn(&SeamBand, u32) -> f32 {
        match self {
            Self::Binary => binary_weight,
            Self::Gradient => gradient_weight,
        }
    }
}

impl std::fmt::Display for MaskMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MaskMode {
    type Err = SeamMaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "gradient" => Ok(Self::Gradient),
            other => Err(SeamMaskError::validation(format!(
                "unknown mask mode '{other}' (expected 'binary' or 'gradient')"
            ))),
        }
    }
}

/// Weight of pixel `p` for a binary band.
pub fn binary_weight(band: &SeamBand, p: u32) -> f32 {
    if band.contains(p) { 1.0 } else { 0.0 }
}

/// Weight of pixel `p` for a gradient band. Zero half-width contributes nothing.
pub fn gradient_weight(band: &SeamBand, p: u32) -> f32 {
    if band.half_width == 0 {
        return 0.0;
    }
    let d = band.distance(p) as f32 / band.half_width as f32;
    (1.0 - d).clamp(0.0, 1.0)
}

/// Rasterization controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterSettings {
    /// Fill rows on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

/// Paint `x_bands` (vertical stripes) and `y_bands` (horizontal stripes) into a
/// fresh `width x height` mask with [`MASK_CHANNELS`] channels.
pub fn rasterize(
    x_bands: &[SeamBand],
    y_bands: &[SeamBand],
    width: u32,
    height: u32,
    mode: MaskMode,
) -> Mask {
    rasterize_with(
        x_bands,
        y_bands,
        width,
        height,
        mode,
        RasterSettings::default(),
    )
}

/// [`rasterize`] with explicit [`RasterSettings`].
///
/// Each axis is reduced to a 1D profile (max over its bands); a pixel takes
/// the max of its column and row profile values, so crossings never exceed 1.
pub fn rasterize_with(
    x_bands: &[SeamBand],
    y_bands: &[SeamBand],
    width: u32,
    height: u32,
    mode: MaskMode,
    settings: RasterSettings,
) -> Mask {
    tracing::debug!(
        x_bands = x_bands.len(),
        y_bands = y_bands.len(),
        width,
        height,
        %mode,
        parallel = settings.parallel,
        "rasterize seam mask"
    );

    let weight = mode.weight_fn();
    let cols = axis_profile(x_bands, width, weight);
    let rows = axis_profile(y_bands, height, weight);

    let mut mask = Mask::zeros(width, height, MASK_CHANNELS);
    let row_len = width as usize * MASK_CHANNELS;
    if row_len == 0 || height == 0 {
        return mask;
    }

    let data = mask.as_mut_slice();
    if settings.parallel {
        data.par_chunks_mut(row_len)
            .zip(rows.par_iter())
            .for_each(|(row, &rv)| fill_row(row, &cols, rv));
    } else {
        for (row, &rv) in data.chunks_mut(row_len).zip(rows.iter()) {
            fill_row(row, &cols, rv);
        }
    }
    mask
}

fn axis_profile(bands: &[SeamBand], length: u32, weight: fn(&SeamBand, u32) -> f32) -> Vec<f32> {
    let mut profile = vec![0.0f32; length as usize];
    for band in bands {
        let end = band.end.min(length);
        for p in band.start.min(end)..end {
            let slot = &mut profile[p as usize];
            *slot = slot.max(weight(band, p));
        }
    }
    profile
}

fn fill_row(row: &mut [f32], cols: &[f32], row_value: f32) {
    for (px, &cv) in row.chunks_exact_mut(MASK_CHANNELS).zip(cols) {
        px.fill(cv.max(row_value));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterizer.rs"]
mod tests;
