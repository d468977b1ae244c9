use crate::foundation::core::{Axis, ImageSize};
use crate::grid::layout::TileLayout;
use crate::grid::planner::GRID_CONTRACT_VERSION;
use crate::params::SeamMaskParams;
use crate::raster::mask::Mask;
use crate::raster::rasterizer::{RasterSettings, rasterize_with};
use crate::seam::locator::{SeamBand, locate};

/// Tile layout and seam bands derived from one set of parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeamPlan {
    /// [`GRID_CONTRACT_VERSION`] the layout was planned with.
    pub grid_contract: u32,
    /// Image dimensions.
    pub size: ImageSize,
    /// Tile grids on both axes.
    pub layout: TileLayout,
    /// Bands between horizontally adjacent tiles (vertical stripes).
    pub x_bands: Vec<SeamBand>,
    /// Bands between vertically adjacent tiles (horizontal stripes).
    pub y_bands: Vec<SeamBand>,
}

impl SeamPlan {
    /// Bands along `axis`.
    pub fn bands(&self, axis: Axis) -> &[SeamBand] {
        match axis {
            Axis::X => &self.x_bands,
            Axis::Y => &self.y_bands,
        }
    }
}

/// Plan tile grids and seam bands without painting.
#[tracing::instrument(skip(params), fields(w = params.image_width, h = params.image_height))]
pub fn plan_seams(params: &SeamMaskParams) -> SeamPlan {
    let size = ImageSize {
        width: params.image_width,
        height: params.image_height,
    };
    let layout = TileLayout::plan(size, params.tile_width, params.tile_height, params.overlap);
    let x_bands = locate(&layout.x, params.seam_width);
    let y_bands = locate(&layout.y, params.seam_width);
    tracing::debug!(
        cols = layout.x.len(),
        rows = layout.y.len(),
        x_bands = x_bands.len(),
        y_bands = y_bands.len(),
        "planned seams"
    );
    SeamPlan {
        grid_contract: GRID_CONTRACT_VERSION,
        size,
        layout,
        x_bands,
        y_bands,
    }
}

/// Generate the seam mask for `params`.
///
/// Total over all inputs: parameters are not range-checked here (see
/// [`SeamMaskParams::validate`] and [`SeamMaskParams::clamped`]). Single-tile
/// images and zero-width seams produce an all-zero mask.
pub fn generate(params: &SeamMaskParams) -> Mask {
    generate_with(params, RasterSettings::default())
}

/// [`generate`] with explicit [`RasterSettings`].
#[tracing::instrument(skip(params), fields(mode = %params.mode))]
pub fn generate_with(params: &SeamMaskParams, settings: RasterSettings) -> Mask {
    let plan = plan_seams(params);
    render_plan(&plan, params, settings)
}

/// Paint an existing [`SeamPlan`].
pub fn render_plan(plan: &SeamPlan, params: &SeamMaskParams, settings: RasterSettings) -> Mask {
    rasterize_with(
        &plan.x_bands,
        &plan.y_bands,
        plan.size.width,
        plan.size.height,
        params.mode,
        settings,
    )
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
