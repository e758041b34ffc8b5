//! Hole-filling regression test
//!
//! Exercises the forward-mapping + hole-filling pipeline end to end:
//!   1. At orthogonal angles the quarter-turn mapping is a bijection, so a
//!      solid white raster comes out with no zero pixels at all.
//!   2. At oblique angles forward mapping leaves gaps; every interior gap
//!      with a lit neighbor is lit by the single filling pass.
//!   3. Filling is a strict repair: it only ever touches all-zero pixels.

use rastermap_core::{Raster, Rgb};
use rastermap_rotate::{CanvasMode, RotationParams, fill_holes, rotate_forward};
use rastermap_test::{RegParams, random_raster, solid};

/// Interior all-zero pixels of `raster` with at least one non-zero
/// orthogonal neighbor - the seam artifacts the filler must repair.
fn seam_holes(raster: &Raster) -> Vec<(u32, u32)> {
    let mut holes = Vec::new();
    for y in 1..raster.height() - 1 {
        for x in 1..raster.width() - 1 {
            if !raster.get_unchecked(x, y).is_black() {
                continue;
            }
            let neighbors = [
                raster.get_unchecked(x, y - 1),
                raster.get_unchecked(x, y + 1),
                raster.get_unchecked(x - 1, y),
                raster.get_unchecked(x + 1, y),
            ];
            if neighbors.iter().any(|p| !p.is_black()) {
                holes.push((x, y));
            }
        }
    }
    holes
}

#[test]
fn hole_fill_reg() {
    let mut rp = RegParams::new("hole_fill");

    let white = solid(10, 10, Rgb::WHITE);

    // --- Orthogonal angles: bijective mapping, no holes possible ---
    for angle in [0, 90, 180, 270] {
        let params = RotationParams::degrees(angle).pivot(5, 5);
        let rotated = rotate_forward(&white, &params, CanvasMode::AutoFit).expect("forward");
        let filled = fill_holes(&rotated);
        rp.compare_values(0.0, filled.count_black() as f64, 0.0);
    }

    // --- Oblique angles: every seam hole of the mapper output is lit ---
    for angle in [17, 30, 45, 77, 205] {
        let params = RotationParams::degrees(angle).pivot(5, 5);
        let rotated = rotate_forward(&white, &params, CanvasMode::AutoFit).expect("forward");
        let filled = fill_holes(&rotated);
        let survivors = seam_holes(&rotated)
            .into_iter()
            .filter(|&(x, y)| filled.get_unchecked(x, y).is_black())
            .count();
        rp.compare_values(0.0, survivors as f64, 0.0);
    }

    // --- Filling never touches a non-zero pixel ---
    let pixs = random_raster(16, 16, 9);
    let params = RotationParams::degrees(33).pivot(8, 8);
    let rotated = rotate_forward(&pixs, &params, CanvasMode::AutoFit).expect("forward");
    let filled = fill_holes(&rotated);
    let mut altered_lit = 0;
    for y in 0..rotated.height() {
        for x in 0..rotated.width() {
            let before = rotated.get_unchecked(x, y);
            if !before.is_black() && filled.get_unchecked(x, y) != before {
                altered_lit += 1;
            }
        }
    }
    rp.compare_values(0.0, altered_lit as f64, 0.0);

    assert!(rp.cleanup(), "hole_fill regression test failed");
}
