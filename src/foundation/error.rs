/// Convenience result type used across seammask.
pub type SeamMaskResult<T> = Result<T, SeamMaskError>;

/// Top-level error taxonomy used by the public APIs.
///
/// The mask core itself is total; errors only surface from parameter
/// validation, buffer export and IO at the edges.
#[derive(thiserror::Error, Debug)]
pub enum SeamMaskError {
    /// Parameters outside their declared range or step.
    #[error("validation error: {0}")]
    Validation(String),

    /// Mask buffer could not be built or converted.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing parameters and plans.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeamMaskError {
    /// Build a [`SeamMaskError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeamMaskError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`SeamMaskError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SeamMaskError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
