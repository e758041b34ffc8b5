//! Error types for rastermap-rotate
//!
//! The error type is `Clone` so a strategy's memo cell can cache a failure
//! and re-report it on later `compute()` calls without rerunning the mapper.

use thiserror::Error;

/// Errors that can occur during rotation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotateError {
    /// Core raster error
    #[error("core error: {0}")]
    Core(#[from] rastermap_core::Error),

    /// Source raster has zero width or height
    #[error("degenerate image: {width}x{height}")]
    DegenerateImage { width: u32, height: u32 },

    /// Auto-fit bounding box exceeds the addressable canvas
    #[error("rotated bounding box overflows the destination canvas")]
    CanvasOverflow,

    /// The reference rotation library rejected the input
    #[error("reference rotation failed: {0}")]
    Oracle(String),

    /// A strategy failed; carries enough context to reproduce the failure
    #[error("strategy '{label}' failed (angle {angle}, pivot ({px}, {py})): {source}")]
    StrategyFailed {
        label: String,
        angle: i64,
        px: i64,
        py: i64,
        #[source]
        source: Box<RotateError>,
    },
}

/// Result type for rotation operations
pub type RotateResult<T> = Result<T, RotateError>;
