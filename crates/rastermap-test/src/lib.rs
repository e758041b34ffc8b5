//! rastermap-test - Regression test helpers
//!
//! A small harness in the regutils style: a [`RegParams`] checker that
//! records failures and reports a single verdict, plus deterministic
//! builders for test rasters so tests need no image assets on disk.
//!
//! # Usage
//!
//! ```
//! use rastermap_test::{RegParams, gradient};
//!
//! let mut rp = RegParams::new("example");
//! let raster = gradient(8, 8);
//! rp.compare_values(8.0, raster.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rastermap_core::{Raster, Rgb};

/// A raster with every pixel set to `fill`.
///
/// # Panics
///
/// Panics on zero dimensions; test rasters are always non-degenerate
/// unless a test constructs one deliberately via `Raster::from_raw`.
pub fn solid(width: u32, height: u32, fill: Rgb) -> Raster {
    Raster::filled(width, height, fill).unwrap()
}

/// A smooth two-axis gradient with no all-zero pixels, suitable for
/// round-trip tolerance checks (nearby pixels have nearby values).
pub fn gradient(width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let r = (x * 3).min(255) as u8;
            let g = (y * 3).min(255) as u8;
            raster.set_unchecked(x, y, Rgb::new(r, g, 128));
        }
    }
    raster
}

/// A raster of uniformly random pixels from a seeded generator, so a test
/// sees the same image on every run.
pub fn random_raster(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = Raster::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            raster.set_unchecked(x, y, Rgb::new(rng.random(), rng.random(), rng.random()));
        }
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_has_no_black_pixels() {
        let raster = gradient(16, 16);
        assert_eq!(raster.count_black(), 0);
    }

    #[test]
    fn test_random_raster_is_deterministic() {
        assert_eq!(random_raster(9, 9, 42), random_raster(9, 9, 42));
        assert_ne!(random_raster(9, 9, 42), random_raster(9, 9, 43));
    }

    #[test]
    fn test_solid_fill() {
        let raster = solid(3, 3, Rgb::new(5, 6, 7));
        assert!(raster.pixels().iter().all(|&p| p == Rgb::new(5, 6, 7)));
    }
}
