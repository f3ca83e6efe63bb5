//! Vector field samples over a rectilinear lattice.
//!
//! A [`VectorField`] stores one flat array per component, each laid out
//! exactly like the grid's lattice (see [`crate::grid`]).

use crate::error::TraceError;
use crate::grid::{Dimensionality, RectilinearGrid};

/// Per-component samples of a 2D or 3D vector field.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    u: Vec<f64>,
    v: Vec<f64>,
    w: Option<Vec<f64>>,
}

impl VectorField {
    /// Creates a planar field from its x and y components.
    pub fn new_2d(u: Vec<f64>, v: Vec<f64>) -> Self {
        Self { u, v, w: None }
    }

    /// Creates a spatial field from its x, y and z components.
    pub fn new_3d(u: Vec<f64>, v: Vec<f64>, w: Vec<f64>) -> Self {
        Self { u, v, w: Some(w) }
    }

    /// Creates a field holding the same vector at every lattice point.
    pub fn constant(grid: &RectilinearGrid, value: [f64; 3]) -> Self {
        let n = grid.point_count();
        let w = match grid.dimensionality() {
            Dimensionality::TwoD => None,
            Dimensionality::ThreeD => Some(vec![value[2]; n]),
        };
        Self {
            u: vec![value[0]; n],
            v: vec![value[1]; n],
            w,
        }
    }

    pub fn u(&self) -> &[f64] {
        &self.u
    }

    pub fn v(&self) -> &[f64] {
        &self.v
    }

    pub fn w(&self) -> Option<&[f64]> {
        self.w.as_deref()
    }

    /// Checks every component the grid needs against its lattice size.
    ///
    /// A planar grid ignores `w`, even when the grid was built from a single
    /// z layer and a `w` array was supplied alongside it.
    pub fn validate(&self, grid: &RectilinearGrid) -> Result<(), TraceError> {
        let expected = grid.point_count();
        check_len("field u", expected, self.u.len())?;
        check_len("field v", expected, self.v.len())?;
        if grid.dimensionality() == Dimensionality::ThreeD {
            let w = self.w.as_ref().ok_or(TraceError::MissingComponent("field w"))?;
            check_len("field w", expected, w.len())?;
        }
        Ok(())
    }
}

pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> Result<(), TraceError> {
    if expected == got {
        Ok(())
    } else {
        Err(TraceError::ShapeMismatch {
            what,
            expected,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2d() -> RectilinearGrid {
        RectilinearGrid::new_2d(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]).unwrap()
    }

    fn grid_3d() -> RectilinearGrid {
        RectilinearGrid::new_3d(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0]).unwrap()
    }

    #[test]
    fn matching_planar_field_validates() {
        let field = VectorField::new_2d(vec![1.0; 6], vec![0.0; 6]);
        assert!(field.validate(&grid_2d()).is_ok());
    }

    #[test]
    fn short_component_is_shape_mismatch() {
        let field = VectorField::new_2d(vec![1.0; 6], vec![0.0; 5]);
        let err = field.validate(&grid_2d()).unwrap_err();
        assert!(matches!(
            err,
            TraceError::ShapeMismatch {
                what: "field v",
                expected: 6,
                got: 5
            }
        ));
    }

    #[test]
    fn spatial_grid_requires_w() {
        let field = VectorField::new_2d(vec![1.0; 8], vec![0.0; 8]);
        let err = field.validate(&grid_3d()).unwrap_err();
        assert!(matches!(err, TraceError::MissingComponent("field w")));
    }

    #[test]
    fn spatial_grid_checks_w_length() {
        let field = VectorField::new_3d(vec![1.0; 8], vec![0.0; 8], vec![0.0; 7]);
        assert!(matches!(
            field.validate(&grid_3d()),
            Err(TraceError::ShapeMismatch { what: "field w", .. })
        ));
    }

    #[test]
    fn planar_grid_ignores_w() {
        let field = VectorField::new_3d(vec![1.0; 6], vec![0.0; 6], vec![0.0; 2]);
        assert!(field.validate(&grid_2d()).is_ok());
    }

    #[test]
    fn constant_field_matches_grid() {
        let grid = grid_3d();
        let field = VectorField::constant(&grid, [1.0, 2.0, 3.0]);
        assert!(field.validate(&grid).is_ok());
        assert!(field.w().unwrap().iter().all(|&w| w == 3.0));

        let planar = VectorField::constant(&grid_2d(), [1.0, 2.0, 3.0]);
        assert!(planar.w().is_none());
    }
}
