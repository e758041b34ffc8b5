//! Error types for rastermap-core
//!
//! Provides a unified error type for raster construction and pixel access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// rastermap-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match width*height
    #[error("buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Coordinate out of bounds
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for rastermap-core operations
pub type Result<T> = std::result::Result<T, Error>;
