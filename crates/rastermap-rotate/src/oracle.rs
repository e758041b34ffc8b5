//! Reference rotation
//!
//! Adapter around `imageproc`'s geometric rotation, consulted as a trusted
//! oracle for side-by-side comparison with the hand-rolled mappers. The
//! algorithm itself is never reimplemented here; this module only converts
//! buffers and maps parameters.

use crate::error::{RotateError, RotateResult};
use crate::math::RotationParams;
use crate::require_nonempty;
use image::RgbImage;
use imageproc::geometric_transformations::{Interpolation, rotate};
use rastermap_core::{Raster, Rgb};

/// Rotate using the external reference implementation.
///
/// Output dimensions equal the source's; sampling is nearest-neighbor with
/// a black default, matching what the in-house mappers produce for pixels
/// with no source.
///
/// # Errors
///
/// [`RotateError::DegenerateImage`] for a zero-area source, and
/// [`RotateError::Oracle`] if a buffer conversion is rejected.
pub fn rotate_reference(src: &Raster, params: &RotationParams) -> RotateResult<Raster> {
    require_nonempty(src)?;

    let img = raster_to_image(src)?;
    // imageproc rotates clockwise for positive theta (y-down coordinates).
    let theta = (params.normalized_degrees() as f32).to_radians();
    let theta = if params.clockwise { theta } else { -theta };
    let center = (params.pivot.0 as f32, params.pivot.1 as f32);

    let rotated = rotate(
        &img,
        center,
        theta,
        Interpolation::Nearest,
        image::Rgb([0, 0, 0]),
    );
    image_to_raster(&rotated)
}

fn raster_to_image(src: &Raster) -> RotateResult<RgbImage> {
    let mut bytes = Vec::with_capacity(src.pixels().len() * 3);
    for px in src.pixels() {
        bytes.extend_from_slice(&[px.r, px.g, px.b]);
    }
    RgbImage::from_raw(src.width(), src.height(), bytes)
        .ok_or_else(|| RotateError::Oracle("raster buffer rejected by image container".into()))
}

fn image_to_raster(img: &RgbImage) -> RotateResult<Raster> {
    let pixels = img
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    Raster::from_raw(img.width(), img.height(), pixels).map_err(RotateError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> Raster {
        let mut raster = Raster::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                raster.set_unchecked(x, y, Rgb::new((x * 3) as u8, (y * 3) as u8, 7));
            }
        }
        raster
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let src = gradient(9, 6);
        let params = RotationParams::degrees(0).pivot(4, 3);
        let out = rotate_reference(&src, &params).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_dimensions_preserved() {
        let src = gradient(12, 5);
        for angle in [30, 90, 215] {
            let params = RotationParams::degrees(angle).pivot(6, 2);
            let out = rotate_reference(&src, &params).unwrap();
            assert_eq!((out.width(), out.height()), (12, 5), "angle {angle}");
        }
    }

    #[test]
    fn test_degenerate_source_rejected() {
        let src = Raster::from_raw(0, 2, Vec::new()).unwrap();
        let err = rotate_reference(&src, &RotationParams::degrees(45)).unwrap_err();
        assert_eq!(
            err,
            RotateError::DegenerateImage {
                width: 0,
                height: 2
            }
        );
    }

    #[test]
    fn test_buffer_conversions_roundtrip() {
        let src = gradient(5, 4);
        let img = raster_to_image(&src).unwrap();
        let back = image_to_raster(&img).unwrap();
        assert_eq!(back, src);
    }
}
