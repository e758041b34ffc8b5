//! rastermap-rotate - Pixel-remapping rotation engine
//!
//! Rotates a [`Raster`] by an arbitrary angle around a configurable pivot
//! using two competing hand-rolled strategies, with a trusted external
//! implementation available as an oracle:
//!
//! - **Forward mapping** ([`rotate_forward`]): iterate source pixels,
//!   compute each one's destination. Fast to reason about, but coordinate
//!   rounding leaves holes; [`fill_holes`] repairs them in one pass.
//! - **Backward mapping** ([`rotate_backward`]): iterate destination
//!   pixels, compute each one's source. Hole-free by construction.
//! - **Reference** ([`rotate_reference`]): `imageproc`'s rotation, consulted
//!   for side-by-side comparison only.
//!
//! [`RotationCollection`] runs all of them against one input with lazy,
//! memoized, independently failing strategies.
//!
//! # Example
//!
//! ```
//! use rastermap_core::{Raster, Rgb};
//! use rastermap_rotate::{RotationCollection, RotationParams};
//!
//! let source = Raster::filled(32, 32, Rgb::WHITE).unwrap();
//! let params = RotationParams::degrees(45).pivot(16, 16);
//! let collection = RotationCollection::new("square", &source, params);
//! for outcome in collection.compute_all() {
//!     let result = outcome.unwrap();
//!     println!("{}: {}x{}", result.label, result.raster.width(), result.raster.height());
//! }
//! ```

mod backward;
mod collection;
mod error;
mod fill;
mod forward;
pub mod math;
mod oracle;

pub use backward::rotate_backward;
pub use collection::{Algorithm, RotatedResult, RotationCollection, RotationStrategy};
pub use error::{RotateError, RotateResult};
pub use fill::fill_holes;
pub use forward::{CanvasMode, rotate_forward};
pub use math::{RotationParams, rotate_point, round_coord};
pub use oracle::rotate_reference;

use rastermap_core::Raster;

/// Degenerate rasters are rejected before any mapper runs; no partial
/// output is ever produced for them.
pub(crate) fn require_nonempty(src: &Raster) -> RotateResult<()> {
    if src.is_empty() {
        return Err(RotateError::DegenerateImage {
            width: src.width(),
            height: src.height(),
        });
    }
    Ok(())
}
