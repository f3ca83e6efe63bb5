//! Axis-aligned rectilinear grids in two or three dimensions.
//!
//! A [`RectilinearGrid`] is the outer product of per-axis coordinate
//! sequences. Sample arrays over the lattice are flat and x-major:
//! `index = (i * ny + j) * nz + k`, with `nz = 1` for planar grids.

use crate::error::TraceError;

/// A validated, strictly monotonic coordinate sequence along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    coords: Vec<f64>,
    ascending: bool,
}

impl Axis {
    /// Validates `coords` for use as a grid axis.
    ///
    /// Requires at least two finite values that are strictly ascending or
    /// strictly descending. `name` is only used in the error.
    pub fn new(name: char, coords: Vec<f64>) -> Result<Self, TraceError> {
        if coords.len() < 2 {
            return Err(TraceError::InvalidAxis {
                axis: name,
                reason: format!("needs at least 2 coordinates, got {}", coords.len()),
            });
        }
        if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(TraceError::InvalidAxis {
                axis: name,
                reason: format!("coordinate {bad} is not finite"),
            });
        }
        let ascending = coords[1] > coords[0];
        let monotonic = coords.windows(2).all(|w| {
            if ascending {
                w[1] > w[0]
            } else {
                w[1] < w[0]
            }
        });
        if !monotonic {
            return Err(TraceError::InvalidAxis {
                axis: name,
                reason: "coordinates are not strictly monotonic".to_string(),
            });
        }
        Ok(Self { coords, ascending })
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false: an axis holds at least two coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The raw coordinates in their original order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Smallest and largest coordinate.
    pub fn bounds(&self) -> (f64, f64) {
        let first = self.coords[0];
        let last = self.coords[self.coords.len() - 1];
        if self.ascending {
            (first, last)
        } else {
            (last, first)
        }
    }

    /// Finds the cell containing `v`.
    ///
    /// Returns the lower index `i` (so the cell spans `i..=i + 1`) and the
    /// fractional position of `v` inside that cell. Bounds are inclusive.
    /// Returns `None` for values outside the axis range and for NaN.
    pub fn locate(&self, v: f64) -> Option<(usize, f64)> {
        let (lo, hi) = self.bounds();
        if !(lo..=hi).contains(&v) {
            return None;
        }
        let above = if self.ascending {
            self.coords.partition_point(|&c| c <= v)
        } else {
            self.coords.partition_point(|&c| c >= v)
        };
        let i = above.saturating_sub(1).min(self.coords.len() - 2);
        let (c0, c1) = (self.coords[i], self.coords[i + 1]);
        Some((i, (v - c0) / (c1 - c0)))
    }
}

/// Whether tracing runs in the plane or in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimensionality {
    TwoD,
    ThreeD,
}

impl Dimensionality {
    /// Number of active spatial axes.
    pub fn axis_count(self) -> usize {
        match self {
            Dimensionality::TwoD => 2,
            Dimensionality::ThreeD => 3,
        }
    }
}

/// Point count of an `nx * ny * nz` lattice, provided a flat `f64` buffer
/// of that length is addressable.
fn lattice_len(nx: usize, ny: usize, nz: usize) -> Result<usize, TraceError> {
    nx.checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .filter(|n| {
            n.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(TraceError::LatticeTooLarge { nx, ny, nz })
}

/// Structured grid given by one coordinate sequence per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RectilinearGrid {
    x: Axis,
    y: Axis,
    z: Option<Axis>,
    /// Lattice depth; 1 for planar grids, including a single z layer.
    nz: usize,
}

impl RectilinearGrid {
    /// Creates a planar grid.
    pub fn new_2d(x: Vec<f64>, y: Vec<f64>) -> Result<Self, TraceError> {
        let grid = Self {
            x: Axis::new('x', x)?,
            y: Axis::new('y', y)?,
            z: None,
            nz: 1,
        };
        lattice_len(grid.x.len(), grid.y.len(), 1)?;
        Ok(grid)
    }

    /// Creates a grid with a third axis.
    ///
    /// A third axis with at most one coordinate collapses the grid to
    /// [`Dimensionality::TwoD`]; the sample arrays then still have
    /// `nx * ny` entries.
    pub fn new_3d(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, TraceError> {
        if z.len() <= 1 {
            return Self::new_2d(x, y);
        }
        let nz = z.len();
        let grid = Self {
            x: Axis::new('x', x)?,
            y: Axis::new('y', y)?,
            z: Some(Axis::new('z', z)?),
            nz,
        };
        lattice_len(grid.x.len(), grid.y.len(), nz)?;
        Ok(grid)
    }

    /// Creates a grid of `counts[d]` evenly spaced coordinates over
    /// `ranges[d]` per axis. A z count of 1 or less yields a planar grid.
    pub fn uniform(counts: [usize; 3], ranges: [(f64, f64); 3]) -> Result<Self, TraceError> {
        lattice_len(counts[0], counts[1], counts[2].max(1))?;
        let axis = |n: usize, (lo, hi): (f64, f64)| -> Vec<f64> {
            match n {
                0 => Vec::new(),
                1 => vec![lo],
                _ => (0..n)
                    .map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64)
                    .collect(),
            }
        };
        Self::new_3d(
            axis(counts[0], ranges[0]),
            axis(counts[1], ranges[1]),
            axis(counts[2], ranges[2]),
        )
    }

    pub fn dimensionality(&self) -> Dimensionality {
        if self.z.is_some() {
            Dimensionality::ThreeD
        } else {
            Dimensionality::TwoD
        }
    }

    pub fn x(&self) -> &Axis {
        &self.x
    }

    pub fn y(&self) -> &Axis {
        &self.y
    }

    /// The third axis, present only for [`Dimensionality::ThreeD`].
    pub fn z(&self) -> Option<&Axis> {
        self.z.as_ref()
    }

    /// Lattice shape `[nx, ny, nz]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.nz]
    }

    /// Number of lattice points, i.e. the required sample array length.
    ///
    /// Construction rejects lattices whose point count overflows.
    pub fn point_count(&self) -> usize {
        let [nx, ny, nz] = self.shape();
        nx * ny * nz
    }

    /// Flat sample index of lattice point `(i, j, k)`.
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> usize {
        let [_, ny, nz] = self.shape();
        (i * ny + j) * nz + k
    }

    /// Coordinates of lattice point `(i, j, k)`; z is 0 for planar grids
    /// without a layer coordinate.
    pub fn point(&self, i: usize, j: usize, k: usize) -> [f64; 3] {
        let z = self.z.as_ref().map_or(0.0, |z| z.coords()[k]);
        [self.x.coords()[i], self.y.coords()[j], z]
    }
}
