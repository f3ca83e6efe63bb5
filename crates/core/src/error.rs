//! Error types for streamline tracing.

use thiserror::Error;

/// Errors produced while validating inputs or tracing streamlines.
///
/// Structural errors are detected before any integration starts, so a
/// failed call never yields partial output.
#[derive(Debug, Error)]
pub enum TraceError {
    /// An array length disagrees with the grid lattice or with its siblings.
    #[error("shape mismatch for {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A component required by a three-dimensional grid was not supplied.
    #[error("missing {0} for a three-dimensional grid")]
    MissingComponent(&'static str),

    /// A coordinate axis is too short, non-finite, or not strictly monotonic.
    #[error("invalid axis '{axis}': {reason}")]
    InvalidAxis { axis: char, reason: String },

    /// Step length was zero, negative, or not finite.
    #[error("invalid step length {0}: must be positive and finite")]
    InvalidStepLength(f64),

    /// `steps + 1` points per line does not fit in memory indexing.
    #[error("step count {0} is too large")]
    StepCountOverflow(usize),

    /// An output table of `rows * cols` entries cannot be allocated.
    #[error("table of {rows} x {cols} entries is too large")]
    TableTooLarge { rows: usize, cols: usize },

    /// The lattice point count `nx * ny * nz` does not fit in an `f64` buffer.
    #[error("lattice of {nx} x {ny} x {nz} points is too large")]
    LatticeTooLarge { nx: usize, ny: usize, nz: usize },

    /// Field magnitude was exactly zero at an in-bounds sample while the
    /// reject policy was active.
    #[error("degenerate direction for seed {seed} at step {step}: field magnitude is zero")]
    DegenerateDirection { seed: usize, step: usize },

    /// A flow source name was not recognized.
    #[error("unknown flow source: {0}")]
    UnknownSource(String),

    /// Flow source or trace parameters could not be decoded.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// An I/O error, e.g. while writing a snapshot.
    #[error("I/O error: {0}")]
    Io(String),
}
