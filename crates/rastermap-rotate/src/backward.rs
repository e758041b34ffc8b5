//! Backward mapping
//!
//! Walks every destination pixel and asks the inverse rotation which source
//! pixel feeds it. Every destination pixel is resolved independently, so the
//! output has no holes by construction; the only black regions are where the
//! sample falls outside the source extent (expected at the corners when
//! rotating a rectangle), which is intrinsic and must not be filled.

use crate::error::RotateResult;
use crate::math::{RotationParams, rotate_point, round_coord};
use crate::require_nonempty;
use rastermap_core::Raster;

/// Rotate by backward mapping. The destination matches the source
/// dimensions exactly.
///
/// # Errors
///
/// [`crate::RotateError::DegenerateImage`] for a zero-area source.
pub fn rotate_backward(src: &Raster, params: &RotationParams) -> RotateResult<Raster> {
    require_nonempty(src)?;

    let w = src.width();
    let h = src.height();
    let mut dst = Raster::new(w, h)?;
    let inverse = params.inverse();

    for y in 0..h {
        for x in 0..w {
            let (fx, fy) = rotate_point(x as i64, y as i64, &inverse);
            let sx = round_coord(fx);
            let sy = round_coord(fy);
            if sx >= 0 && sx < w as i64 && sy >= 0 && sy < h as i64 {
                dst.set_unchecked(x, y, src.get_unchecked(sx as u32, sy as u32));
            }
        }
    }

    Ok(dst)
}
