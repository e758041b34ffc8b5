//! Error types for rastermap-io

use thiserror::Error;

/// Errors that can occur reading or writing image files
#[derive(Debug, Error)]
pub enum IoError {
    /// Core raster error
    #[error("core error: {0}")]
    Core(#[from] rastermap_core::Error),

    /// Decoder/encoder error from the image library
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
