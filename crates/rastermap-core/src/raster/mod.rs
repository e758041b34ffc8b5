//! Raster - the in-memory image container
//!
//! A `Raster` is a width x height grid of 3-channel 8-bit pixels stored in a
//! single contiguous buffer, row-major, indexed by (x, y). It is the only
//! image representation the rotation engine operates on.
//!
//! # Ownership model
//!
//! A `Raster` is plainly owned. A mapper borrows its source read-only and
//! builds its destination as a private buffer; no reference counting and no
//! interior mutability are involved.

mod access;

use crate::error::{Error, Result};

/// A 3-channel 8-bit pixel.
///
/// `Default` is black (all channels zero), which is also the value of every
/// pixel in a freshly created destination raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels zero.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// All channels at maximum.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// True iff all three channels are zero.
    ///
    /// A black pixel in a mapper's output is either genuine background or a
    /// hole left by forward mapping; the hole filler tells them apart by
    /// looking at the neighborhood, not the pixel alone.
    pub fn is_black(self) -> bool {
        self == Rgb::BLACK
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb { r, g, b }
    }
}

/// Raster - main image container
///
/// Invariant: `pixels.len() == width * height`, enforced by every
/// constructor and relied upon by the unchecked accessors.
///
/// # Examples
///
/// ```
/// use rastermap_core::{Raster, Rgb};
///
/// let mut raster = Raster::new(4, 3).unwrap();
/// raster.set(1, 2, Rgb::WHITE).unwrap();
/// assert_eq!(raster.get(1, 2), Some(Rgb::WHITE));
/// assert_eq!(raster.get(0, 0), Some(Rgb::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a zero-initialized (black) raster.
    ///
    /// This is how mapper destination buffers are made. Zero dimensions are
    /// rejected here; a degenerate raster can only enter the system through
    /// [`Raster::from_raw`], and the rotation engine refuses it up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create a raster with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    pub fn filled(width: u32, height: u32, fill: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Raster {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Wrap an externally produced pixel buffer (e.g. a decoded file).
    ///
    /// Zero dimensions are representable here so that a degenerate input can
    /// be handed to the engine and rejected with a proper error instead of
    /// being unconstructible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True iff the raster has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The underlying row-major pixel buffer.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Consume the raster, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Number of all-zero pixels.
    pub fn count_black(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_black()).count()
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
