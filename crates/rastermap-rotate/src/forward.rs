//! Forward mapping
//!
//! Walks every source pixel, rotates its coordinate, and writes the pixel
//! into the destination. Because rounding to the grid is not injective, some
//! destination cells receive several source pixels (last writer wins) and
//! others receive none, staying black - the signature forward-mapping
//! artifact that [`crate::fill_holes`] repairs.

use crate::error::{RotateError, RotateResult};
use crate::math::{RotationParams, rotate_point, round_coord};
use crate::require_nonempty;
use rastermap_core::Raster;

/// How the forward mapper sizes its destination canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasMode {
    /// Destination has the source dimensions; rotated pixels landing
    /// outside are silently dropped.
    Fixed,
    /// Destination is sized to the bounding box of all rotated coordinates
    /// and translated so no coordinate is negative.
    #[default]
    AutoFit,
}

/// Rotate by forward mapping.
///
/// # Errors
///
/// [`RotateError::DegenerateImage`] for a zero-area source, and in auto-fit
/// mode [`RotateError::CanvasOverflow`] when the bounding box cannot be
/// addressed (pathological pivots).
pub fn rotate_forward(
    src: &Raster,
    params: &RotationParams,
    mode: CanvasMode,
) -> RotateResult<Raster> {
    require_nonempty(src)?;
    match mode {
        CanvasMode::Fixed => forward_fixed(src, params),
        CanvasMode::AutoFit => forward_auto_fit(src, params),
    }
}

fn forward_fixed(src: &Raster, params: &RotationParams) -> RotateResult<Raster> {
    let w = src.width();
    let h = src.height();
    let mut dst = Raster::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let (fx, fy) = rotate_point(x as i64, y as i64, params);
            let nx = round_coord(fx);
            let ny = round_coord(fy);
            if nx >= 0 && nx < w as i64 && ny >= 0 && ny < h as i64 {
                dst.set_unchecked(nx as u32, ny as u32, src.get_unchecked(x, y));
            }
        }
    }

    Ok(dst)
}

fn forward_auto_fit(src: &Raster, params: &RotationParams) -> RotateResult<Raster> {
    let w = src.width();
    let h = src.height();

    // First pass: every rotated coordinate, tracking the running bounding
    // box. The coordinates are kept so the second pass does not redo the
    // trigonometry.
    let mut coords = Vec::with_capacity(w as usize * h as usize);
    let mut min_x = i64::MAX;
    let mut max_x = i64::MIN;
    let mut min_y = i64::MAX;
    let mut max_y = i64::MIN;

    for y in 0..h {
        for x in 0..w {
            let (fx, fy) = rotate_point(x as i64, y as i64, params);
            let nx = round_coord(fx);
            let ny = round_coord(fy);
            min_x = min_x.min(nx);
            max_x = max_x.max(nx);
            min_y = min_y.min(ny);
            max_y = max_y.max(ny);
            coords.push((nx, ny));
        }
    }

    let new_w = canvas_extent(min_x, max_x)?;
    let new_h = canvas_extent(min_y, max_y)?;
    let mut dst = Raster::new(new_w, new_h)?;

    // Second pass: translate by the negated minimum and write. Every
    // coordinate is in bounds by construction of the bounding box.
    for y in 0..h {
        for x in 0..w {
            let (nx, ny) = coords[y as usize * w as usize + x as usize];
            let dx = (nx - min_x) as u32;
            let dy = (ny - min_y) as u32;
            dst.set_unchecked(dx, dy, src.get_unchecked(x, y));
        }
    }

    Ok(dst)
}

/// Bounding-box span `max - min + 1` as a canvas dimension, refusing to
/// wrap on pathological inputs.
fn canvas_extent(min: i64, max: i64) -> RotateResult<u32> {
    let span = max
        .checked_sub(min)
        .and_then(|d| d.checked_add(1))
        .ok_or(RotateError::CanvasOverflow)?;
    u32::try_from(span).map_err(|_| RotateError::CanvasOverflow)
}
