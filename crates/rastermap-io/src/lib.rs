//! rastermap-io - File decode/encode collaborator
//!
//! The rotation engine never touches the filesystem; this crate owns the
//! boundary between image files and [`Raster`]s. Decoding goes through the
//! `image` crate and always lands in 3-channel 8-bit RGB, the only pixel
//! format the engine understands.
//!
//! A decode failure surfaces here as an `Err`; callers must not hand an
//! absent raster to the engine.

mod error;

pub use error::{IoError, IoResult};

use image::RgbImage;
use rastermap_core::{Raster, Rgb};
use std::path::Path;

/// Decode an image file into a raster, converting to RGB8 if needed.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let img = image::open(path)?.to_rgb8();
    image_to_raster(&img)
}

/// Encode a raster to a file; the format is inferred from the extension.
pub fn write_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let img = raster_to_image(raster)?;
    img.save(path)?;
    Ok(())
}

/// Convert a raster into an `image` RGB buffer.
pub fn raster_to_image(raster: &Raster) -> IoResult<RgbImage> {
    let mut bytes = Vec::with_capacity(raster.pixels().len() * 3);
    for px in raster.pixels() {
        bytes.extend_from_slice(&[px.r, px.g, px.b]);
    }
    // from_raw only fails on a length mismatch, which the Raster length
    // invariant rules out.
    RgbImage::from_raw(raster.width(), raster.height(), bytes).ok_or_else(|| {
        IoError::Core(rastermap_core::Error::BufferSizeMismatch {
            expected: raster.pixels().len(),
            actual: 0,
        })
    })
}

/// Convert an `image` RGB buffer into a raster.
pub fn image_to_raster(img: &RgbImage) -> IoResult<Raster> {
    let pixels = img
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    Raster::from_raw(img.width(), img.height(), pixels).map_err(IoError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Raster {
        let mut raster = Raster::new(7, 5).unwrap();
        for y in 0..5 {
            for x in 0..7 {
                raster.set_unchecked(x, y, Rgb::new(x as u8 * 30, y as u8 * 40, 9));
            }
        }
        raster
    }

    #[test]
    fn test_image_conversion_roundtrip() {
        let raster = sample();
        let img = raster_to_image(&raster).unwrap();
        assert_eq!((img.width(), img.height()), (7, 5));
        let back = image_to_raster(&img).unwrap();
        assert_eq!(back, raster);
    }

    #[test]
    fn test_png_encode_decode_roundtrip() {
        let raster = sample();
        let img = raster_to_image(&raster).unwrap();

        let mut encoded = Vec::new();
        img.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .unwrap();

        let decoded = image::load_from_memory(&encoded).unwrap().to_rgb8();
        let back = image_to_raster(&decoded).unwrap();
        assert_eq!(back, raster);
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let err = read_raster("definitely/not/a/real/file.png");
        assert!(err.is_err());
    }
}
