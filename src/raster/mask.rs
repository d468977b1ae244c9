use crate::foundation::error::{SeamMaskError, SeamMaskResult};
use crate::foundation::math::{Fnv1a64, unit_to_u8};

/// Channel count of masks returned by [`generate`](crate::generate).
pub const MASK_CHANNELS: usize = 3;

/// Seam mask buffer of shape `(1, height, width, channels)`.
///
/// Values are `f32` in `[0, 1]`, stored row-major with channels interleaved.
/// Every channel of a pixel holds the same value.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<f32>,
}

impl Mask {
    pub(crate) fn zeros(width: u32, height: u32, channels: usize) -> Self {
        let len = width as usize * height as usize * channels;
        Self {
            width,
            height,
            channels,
            data: vec![0.0; len],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Tensor shape `[1, height, width, channels]`.
    pub fn shape(&self) -> [usize; 4] {
        [1, self.height as usize, self.width as usize, self.channels]
    }

    /// Value at row `y`, column `x`, channel `c`; `None` when out of bounds.
    pub fn get(&self, y: u32, x: u32, c: usize) -> Option<f32> {
        if y >= self.height || x >= self.width || c >= self.channels {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * self.channels + c;
        self.data.get(idx).copied()
    }

    /// Raw interleaved values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the mask, returning the raw interleaved values.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Sum over all values, accumulated in `f64`.
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|&v| f64::from(v)).sum()
    }

    /// Sorted distinct values present in the mask.
    pub fn distinct_values(&self) -> Vec<f32> {
        let mut bits: Vec<u32> = self.data.iter().map(|v| v.to_bits()).collect();
        bits.sort_unstable();
        bits.dedup();
        let mut out: Vec<f32> = bits.into_iter().map(f32::from_bits).collect();
        out.sort_by(f32::total_cmp);
        out
    }

    /// Stable hash over shape and value bit patterns.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_u32(self.channels as u32);
        for &v in &self.data {
            h.write_f32(v);
        }
        h.finish()
    }

    /// Little-endian bytes of every value, in storage order.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    /// Quantize the first channel to an 8-bit grayscale image.
    pub fn to_luma8(&self) -> SeamMaskResult<image::GrayImage> {
        if self.channels == 0 {
            return Err(SeamMaskError::raster("mask has no channels"));
        }
        let px: Vec<u8> = self
            .data
            .chunks_exact(self.channels)
            .map(|p| unit_to_u8(p[0]))
            .collect();
        image::GrayImage::from_raw(self.width, self.height, px)
            .ok_or_else(|| SeamMaskError::raster("mask buffer does not match its dimensions"))
    }

    /// Quantize to an 8-bit RGB image; single-channel masks are broadcast.
    pub fn to_rgb8(&self) -> SeamMaskResult<image::RgbImage> {
        let px: Vec<u8> = match self.channels {
            0 => return Err(SeamMaskError::raster("mask has no channels")),
            1 => self
                .data
                .iter()
                .flat_map(|&v| [unit_to_u8(v); 3])
                .collect(),
            3 => self.data.iter().map(|&v| unit_to_u8(v)).collect(),
            n => {
                return Err(SeamMaskError::raster(format!(
                    "cannot convert {n}-channel mask to rgb"
                )));
            }
        };
        image::RgbImage::from_raw(self.width, self.height, px)
            .ok_or_else(|| SeamMaskError::raster("mask buffer does not match its dimensions"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
