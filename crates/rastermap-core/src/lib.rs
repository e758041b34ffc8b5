//! rastermap-core - Raster container for the rastermap rotation engine
//!
//! This crate provides the fundamental image type shared by the rest of the
//! workspace: a [`Raster`] of 3-channel 8-bit [`Rgb`] pixels, with checked
//! and unchecked pixel access, plus the core error type.
//!
//! Decoding files into rasters lives in `rastermap-io`; the rotation
//! algorithms live in `rastermap-rotate`.

mod error;
mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, Rgb};
