//! Seam masks for tiled image pipelines.
//!
//! A tiled redraw pass processes an image in overlapping tiles; the pixels
//! near tile boundaries often show visible seams. This crate computes a mask
//! marking those seam bands so a targeted follow-up pass can touch only them.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: [`plan_axis`] splits each axis into tiles (`(length, tile, overlap) -> [TilePosition]`).
//!    This is the grid contract shared with the tile splitter, versioned by [`GRID_CONTRACT_VERSION`].
//! 2. **Locate**: [`locate`] places one [`SeamBand`] at the overlap midpoint of every adjacent tile pair.
//! 3. **Rasterize**: [`rasterize`] paints all bands into a [`Mask`] of shape `(1, height, width, 3)`,
//!    either as hard `{0, 1}` stripes ([`MaskMode::Binary`]) or with a linear falloff
//!    ([`MaskMode::Gradient`]).
//!
//! [`generate`] runs all three steps for a [`SeamMaskParams`].
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical parameters produce bit-identical masks.
//! - **Total**: the core never fails; range checks live in [`SeamMaskParams::validate`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod grid;
mod params;
mod pipeline;
mod raster;
mod seam;

pub use foundation::core::{Axis, ImageSize};
pub use foundation::error::{SeamMaskError, SeamMaskResult};
pub use grid::layout::{TileLayout, TileRect};
pub use grid::planner::{GRID_CONTRACT_VERSION, TileGrid, TilePosition, plan_axis, stride};
pub use params::{
    IMAGE_SIZE_RANGE, OVERLAP_RANGE, ParamRange, SEAM_WIDTH_RANGE, SeamMaskParams,
    TILE_SIZE_RANGE,
};
pub use pipeline::{SeamPlan, generate, generate_with, plan_seams, render_plan};
pub use raster::mask::{MASK_CHANNELS, Mask};
pub use raster::rasterizer::{
    MaskMode, RasterSettings, binary_weight, gradient_weight, rasterize, rasterize_with,
};
pub use seam::locator::{SeamBand, locate, locate_with_halfwidth};
