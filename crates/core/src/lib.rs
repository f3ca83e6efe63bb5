#![deny(unsafe_code)]
//! Core types for tracing streamlines through sampled vector fields.
//!
//! Provides the `RectilinearGrid`/`Axis` lattice, `VectorField` samples,
//! `SeedSet`, multilinear interpolation, dense output `Table`s, the
//! fixed-step `StreamlineTracer`, and analytic `FlowSource`s for
//! synthesizing fields.

pub mod error;
pub mod field;
pub mod grid;
pub mod interp;
pub mod seeds;
pub mod source;
pub mod table;
pub mod tracer;

pub use error::TraceError;
pub use field::VectorField;
pub use grid::{Axis, Dimensionality, RectilinearGrid};
pub use seeds::SeedSet;
pub use source::{FlowSource, SourceSpec};
pub use table::Table;
pub use tracer::{trace, DegeneratePolicy, OutputFlags, StreamlineTracer, Streamlines, TraceOptions};
