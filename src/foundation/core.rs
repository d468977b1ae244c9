use crate::foundation::error::{SeamMaskError, SeamMaskResult};

/// Image axis a tile grid or seam band runs along.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis; x bands are vertical stripes.
    X,
    /// Vertical axis; y bands are horizontal stripes.
    Y,
}

impl Axis {
    /// The other axis.
    pub fn orthogonal(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Pixel dimensions of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Build a size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> SeamMaskResult<Self> {
        if width == 0 || height == 0 {
            return Err(SeamMaskError::validation(
                "image size must be non-zero on both axes",
            ));
        }
        Ok(Self { width, height })
    }

    /// Extent along `axis`.
    pub fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Pixel count, or `None` on overflow.
    pub fn area(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
