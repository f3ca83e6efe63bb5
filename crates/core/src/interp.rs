//! Multilinear interpolation over a rectilinear lattice.
//!
//! Bilinear for two axes, trilinear for three. Queries outside the grid's
//! bounding box return [`MISSING`] instead of failing.

use crate::grid::Axis;

/// Sentinel returned for points outside the grid.
pub const MISSING: f64 = f64::NAN;

/// Interpolates `values` at `point` over the lattice spanned by `axes`.
///
/// `strides[d]` is the flat-index step for a unit move along axis `d`.
/// Returns [`MISSING`] when any coordinate falls outside its axis range
/// or is NaN.
pub fn multilinear<const D: usize>(
    axes: &[&Axis; D],
    strides: &[usize; D],
    values: &[f64],
    point: &[f64; D],
) -> f64 {
    let mut base = 0;
    let mut frac = [0.0; D];
    for d in 0..D {
        let Some((i, t)) = axes[d].locate(point[d]) else {
            return MISSING;
        };
        base += i * strides[d];
        frac[d] = t;
    }

    // Sum over the 2^D cell corners; bit d of `corner` selects the upper
    // neighbour along axis d.
    (0..1usize << D)
        .map(|corner| {
            let mut weight = 1.0;
            let mut index = base;
            for d in 0..D {
                if corner & (1 << d) != 0 {
                    weight *= frac[d];
                    index += strides[d];
                } else {
                    weight *= 1.0 - frac[d];
                }
            }
            weight * values[index]
        })
        .sum()
}
