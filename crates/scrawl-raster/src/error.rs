//! Error types for scrawl-raster.

use thiserror::Error;

/// Result type alias using RasterError.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors that can occur while allocating or exporting a surface.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Invalid surface dimensions (must be positive and within limits).
    #[error("invalid dimensions: {width}x{height} at dpr {dpr}")]
    InvalidDimensions { width: f32, height: f32, dpr: f32 },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncode(String),
}

impl From<png::EncodingError> for RasterError {
    fn from(err: png::EncodingError) -> Self {
        RasterError::PngEncode(err.to_string())
    }
}
