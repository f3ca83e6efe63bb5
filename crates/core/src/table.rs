//! Dense `(rows, cols)` tables of `f64`, one row per seed.

use crate::error::TraceError;
use serde::{Deserialize, Serialize};

/// A fixed-shape, row-major 2D array.
///
/// Tables are allocated once at their final size and filled in place;
/// entries are zero until written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Table {
    /// Creates a zero-filled table.
    ///
    /// Returns `TableTooLarge` when `rows * cols` overflows or the buffer
    /// cannot be reserved; nothing is allocated in that case.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, TraceError> {
        let too_large = || TraceError::TableTooLarge { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large())?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`. Panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of range for {} columns", self.cols);
        self.data[row * self.cols + col]
    }

    /// Sets the value at `(row, col)`. Panics if out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(col < self.cols, "column {col} out of range for {} columns", self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}
