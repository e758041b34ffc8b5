//! rastermap - Arbitrary-angle raster rotation by pixel remapping
//!
//! Rotates a 3x8-bit RGB raster around a configurable pivot using two
//! competing hand-rolled strategies - forward mapping (source-to-dest,
//! gap-prone, hole-filled) and backward mapping (dest-to-source, hole-free) -
//! and can run a trusted external implementation alongside them for
//! comparison.
//!
//! # Example
//!
//! ```
//! use rastermap::{Raster, Rgb, RotationCollection, RotationParams};
//!
//! let source = Raster::filled(64, 64, Rgb::WHITE).unwrap();
//! let params = RotationParams::degrees(30).pivot(32, 32);
//!
//! let collection = RotationCollection::new("white-square", &source, params);
//! for outcome in collection.compute_all() {
//!     let result = outcome.unwrap();
//!     println!("{}", result.label);
//! }
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rastermap_core::*;

// Re-export the rotation engine at the root; it is the crate's whole point
pub use rastermap_rotate::*;

// File I/O lives behind a module to keep the boundary visible
pub use rastermap_io as io;
