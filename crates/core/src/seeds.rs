//! Seed points from which streamlines start.

use crate::error::TraceError;
use crate::field::check_len;
use serde::{Deserialize, Serialize};

/// Initial positions, one coordinate sequence per axis, all of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSet {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<Vec<f64>>,
}

impl SeedSet {
    /// Creates planar seeds. Returns `ShapeMismatch` if `y` differs in length from `x`.
    pub fn new_2d(x: Vec<f64>, y: Vec<f64>) -> Result<Self, TraceError> {
        check_len("seed y", x.len(), y.len())?;
        Ok(Self { x, y, z: None })
    }

    /// Creates spatial seeds. Returns `ShapeMismatch` on unequal lengths.
    pub fn new_3d(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, TraceError> {
        check_len("seed y", x.len(), y.len())?;
        check_len("seed z", x.len(), z.len())?;
        Ok(Self { x, y, z: Some(z) })
    }

    /// `count` seeds evenly spaced on the segment `from..=to`.
    ///
    /// A single seed sits at `from`. The z coordinate is kept so the set can
    /// seed a spatial grid; planar tracing drops it.
    pub fn line(from: [f64; 3], to: [f64; 3], count: usize) -> Self {
        let at = |d: usize| -> Vec<f64> {
            (0..count)
                .map(|i| {
                    let t = if count > 1 {
                        i as f64 / (count - 1) as f64
                    } else {
                        0.0
                    };
                    from[d] + (to[d] - from[d]) * t
                })
                .collect()
        };
        Self {
            x: at(0),
            y: at(1),
            z: Some(at(2)),
        }
    }

    /// Number of seeds.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> Option<&[f64]> {
        self.z.as_deref()
    }

    /// Coordinates of seed `i`; z is 0 for planar seeds.
    pub fn point(&self, i: usize) -> [f64; 3] {
        let z = self.z.as_ref().map_or(0.0, |z| z[i]);
        [self.x[i], self.y[i], z]
    }

    /// Re-checks lengths, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), TraceError> {
        check_len("seed y", self.x.len(), self.y.len())?;
        if let Some(z) = &self.z {
            check_len("seed z", self.x.len(), z.len())?;
        }
        Ok(())
    }
}
