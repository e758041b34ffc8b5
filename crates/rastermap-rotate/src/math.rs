//! Pure rotation math
//!
//! Stateless coordinate transforms shared by the forward and backward
//! mappers. All functions take their parameters explicitly; quantization to
//! integer grid coordinates happens in exactly one place, [`round_coord`].

/// Parameters of a rotation: angle, pivot point, and direction.
///
/// The angle may be any signed magnitude; it is normalized modulo 360 before
/// trigonometric evaluation, so very large inputs lose no precision. The
/// pivot need not lie inside the raster; an out-of-range pivot simply shifts
/// where the rotation is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationParams {
    /// Rotation amount in degrees, any sign and magnitude
    pub angle_degrees: i64,
    /// Point the rotation is centered on, in pixel coordinates
    pub pivot: (i64, i64),
    /// Rotation direction; false = counter-clockwise
    pub clockwise: bool,
}

impl RotationParams {
    /// Clockwise rotation about (0, 0).
    pub fn degrees(angle_degrees: i64) -> Self {
        RotationParams {
            angle_degrees,
            pivot: (0, 0),
            clockwise: true,
        }
    }

    /// Set the pivot point.
    pub fn pivot(mut self, x: i64, y: i64) -> Self {
        self.pivot = (x, y);
        self
    }

    /// Set the rotation direction.
    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// The angle reduced to [0, 360).
    pub fn normalized_degrees(&self) -> i64 {
        self.angle_degrees.rem_euclid(360)
    }

    /// Parameters that undo this rotation: same pivot, same direction,
    /// angle `(360 - a) mod 360`.
    ///
    /// The backward mapper evaluates the forward transform with these
    /// parameters to find which source pixel feeds a destination pixel.
    pub fn inverse(&self) -> Self {
        RotationParams {
            angle_degrees: (360 - self.normalized_degrees()).rem_euclid(360),
            ..*self
        }
    }
}

/// Rotate the point (x, y) about the pivot, returning real coordinates
/// prior to rounding.
///
/// Clockwise (image coordinates, y down):
///   x' = dx*cos - dy*sin + px
///   y' = dx*sin + dy*cos + py
///
/// Counter-clockwise swaps the sin signs.
pub fn rotate_point(x: i64, y: i64, params: &RotationParams) -> (f64, f64) {
    let rad = (params.normalized_degrees() as f64).to_radians();
    let (sin, cos) = rad.sin_cos();
    let px = params.pivot.0 as f64;
    let py = params.pivot.1 as f64;
    let dx = x as f64 - px;
    let dy = y as f64 - py;
    if params.clockwise {
        (dx * cos - dy * sin + px, dx * sin + dy * cos + py)
    } else {
        (dx * cos + dy * sin + px, -dx * sin + dy * cos + py)
    }
}

/// Quantize a real coordinate to the pixel grid: nearest integer, ties
/// rounded away from zero (the `f64::round` policy).
///
/// This quantization is what makes forward mapping non-injective and is the
/// sole source of the holes the hole filler repairs. Values beyond the i64
/// range saturate; the mappers bounds-check the result before indexing.
#[inline]
pub fn round_coord(v: f64) -> i64 {
    v.round() as i64
}
