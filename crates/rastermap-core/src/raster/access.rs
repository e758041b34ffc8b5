//! Pixel access functions
//!
//! Checked accessors return `Option`/`Result` for callers that probe
//! coordinates computed at runtime; the `_unchecked` pair is for inner loops
//! whose bounds are established by the loop itself.

use super::{Raster, Rgb};
use crate::error::{Error, Result};

impl Raster {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is out of
    /// bounds.
    pub fn set(&mut self, x: u32, y: u32, value: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.pixels[idx] = value;
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: Rgb) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.index(x, y);
        self.pixels[idx] = value;
    }
}
