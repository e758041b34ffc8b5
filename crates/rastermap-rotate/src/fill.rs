//! Hole filling
//!
//! A single-pass repair for the gaps forward mapping leaves behind. This is
//! deliberately not an inpainting algorithm: one pass, fixed 4-neighborhood,
//! zero-valued neighbors included in the mean. Run it exactly once per
//! forward rotation and never on backward-mapped output, whose black regions
//! are intrinsic corner loss.

use rastermap_core::{Raster, Rgb};

/// Fill isolated all-zero pixels with the rounded mean of their four
/// orthogonal neighbors.
///
/// Only interior pixels are considered (the one-pixel border is left
/// untouched). A candidate whose four neighbors are themselves all-zero is
/// genuine background and is skipped, so legitimately black regions and the
/// outer margin are not eroded. Zero neighbors still count toward the mean,
/// which visibly darkens filled seams; that matches the behavior this
/// filter reproduces.
///
/// Neighbors are always read from the frozen input, so the pass is
/// order-independent. Reapplying the filter to its own output is not
/// guaranteed to be a no-op, because filled pixels change what a second
/// pass's all-zero-neighbors test sees.
pub fn fill_holes(src: &Raster) -> Raster {
    let w = src.width();
    let h = src.height();
    let mut out = src.clone();
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if !src.get_unchecked(x, y).is_black() {
                continue;
            }
            let neighbors = [
                src.get_unchecked(x, y - 1),
                src.get_unchecked(x, y + 1),
                src.get_unchecked(x - 1, y),
                src.get_unchecked(x + 1, y),
            ];
            if neighbors.iter().all(|p| p.is_black()) {
                continue;
            }
            out.set_unchecked(x, y, average(&neighbors));
        }
    }

    out
}

/// Per-channel rounded mean of four pixels. `(sum + 2) / 4` rounds to
/// nearest with the same away-from-zero tie policy the mappers use for
/// coordinates.
fn average(neighbors: &[Rgb; 4]) -> Rgb {
    let mean = |channel: fn(Rgb) -> u8| -> u8 {
        let sum: u32 = neighbors.iter().map(|&p| channel(p) as u32).sum();
        ((sum + 2) / 4) as u8
    };
    Rgb {
        r: mean(|p| p.r),
        g: mean(|p| p.g),
        b: mean(|p| p.b),
    }
}
