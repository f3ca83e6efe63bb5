//! Fixed-step streamline integration.
//!
//! [`StreamlineTracer`] advances every seed through the field in steps of
//! constant Euclidean length along the locally sampled, normalized field
//! direction. Each line holds exactly `steps + 1` points no matter where it
//! goes: a line that leaves the grid keeps "stepping" with NaN coordinates,
//! which downstream renderers treat as a gap.
//!
//! Scalar outputs (magnitude, components) are sampled at the point itself,
//! so column `i` of a scalar table describes the field at position `i`, and
//! the step from `i` to `i + 1` is taken along that same vector.

use crate::error::TraceError;
use crate::field::VectorField;
use crate::grid::{Axis, Dimensionality, RectilinearGrid};
use crate::interp::multilinear;
use crate::seeds::SeedSet;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Default number of integration steps per line.
pub const DEFAULT_STEPS: usize = 100;
/// Default distance advanced per step.
pub const DEFAULT_STEP_LENGTH: f64 = 0.1;

/// Which optional per-point scalar tables to produce.
///
/// `w` only applies to three-dimensional grids and is ignored otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFlags {
    pub magnitude: bool,
    pub u: bool,
    pub v: bool,
    pub w: bool,
}

impl OutputFlags {
    /// Every scalar output enabled.
    pub fn all() -> Self {
        Self {
            magnitude: true,
            u: true,
            v: true,
            w: true,
        }
    }

    /// Flag for component `d` (0 = u, 1 = v, 2 = w).
    fn component(self, d: usize) -> bool {
        match d {
            0 => self.u,
            1 => self.v,
            _ => self.w,
        }
    }

    fn any(self, axis_count: usize) -> bool {
        self.magnitude || (0..axis_count).any(|d| self.component(d))
    }
}

/// What to do when the field vanishes at a sampled point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// Divide by the zero magnitude anyway; the line continues as NaN.
    #[default]
    Propagate,
    /// Abort the whole call with [`TraceError::DegenerateDirection`].
    Reject,
}

/// Integration parameters for one tracing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Steps per line; each line holds `steps + 1` points.
    pub steps: usize,
    /// Euclidean distance advanced per step.
    pub step_length: f64,
    pub outputs: OutputFlags,
    pub on_degenerate: DegeneratePolicy,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_length: DEFAULT_STEP_LENGTH,
            outputs: OutputFlags::default(),
            on_degenerate: DegeneratePolicy::default(),
        }
    }
}

impl TraceOptions {
    /// Options with no scalar outputs and the propagate policy.
    pub fn new(steps: usize, step_length: f64) -> Self {
        Self {
            steps,
            step_length,
            ..Self::default()
        }
    }

    pub fn with_outputs(mut self, outputs: OutputFlags) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_policy(mut self, on_degenerate: DegeneratePolicy) -> Self {
        self.on_degenerate = on_degenerate;
        self
    }

    /// Reads options from a JSON object; missing keys take their defaults.
    pub fn from_json(params: &Value) -> Result<Self, TraceError> {
        let options: Self = serde_json::from_value(params.clone())
            .map_err(|e| TraceError::InvalidParams(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects a non-positive or non-finite step length and a step count
    /// whose point count would overflow. Table sizes also depend on the
    /// seed count and are checked when tracing.
    pub fn validate(&self) -> Result<(), TraceError> {
        if !(self.step_length.is_finite() && self.step_length > 0.0) {
            return Err(TraceError::InvalidStepLength(self.step_length));
        }
        self.points_per_line()?;
        Ok(())
    }

    fn points_per_line(&self) -> Result<usize, TraceError> {
        self.steps
            .checked_add(1)
            .ok_or(TraceError::StepCountOverflow(self.steps))
    }
}

/// Traced lines, one table row per seed and `steps + 1` columns.
///
/// Position tables are always present; scalar tables only when requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Streamlines {
    dimensionality: Dimensionality,
    positions: Vec<Table>,
    magnitude: Option<Table>,
    components: Vec<Option<Table>>,
}

impl Streamlines {
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    pub fn x(&self) -> &Table {
        &self.positions[0]
    }

    pub fn y(&self) -> &Table {
        &self.positions[1]
    }

    /// z positions; `None` for planar tracing.
    pub fn z(&self) -> Option<&Table> {
        self.positions.get(2)
    }

    pub fn magnitude(&self) -> Option<&Table> {
        self.magnitude.as_ref()
    }

    pub fn u(&self) -> Option<&Table> {
        self.components[0].as_ref()
    }

    pub fn v(&self) -> Option<&Table> {
        self.components[1].as_ref()
    }

    pub fn w(&self) -> Option<&Table> {
        self.components.get(2).and_then(Option::as_ref)
    }

    /// Number of traced lines.
    pub fn seed_count(&self) -> usize {
        self.x().rows()
    }

    /// Points per line, i.e. `steps + 1`.
    pub fn points_per_line(&self) -> usize {
        self.x().cols()
    }

    /// Points of line `seed` as `[x, y, z]`, z being 0 for planar lines.
    pub fn polyline(&self, seed: usize) -> Vec<[f64; 3]> {
        (0..self.points_per_line())
            .map(|i| {
                let z = self.z().map_or(0.0, |z| z.get(seed, i));
                [self.x().get(seed, i), self.y().get(seed, i), z]
            })
            .collect()
    }

    /// All tables in the fixed order x, y, (z), (magnitude), (u), (v), (w).
    pub fn into_arrays(self) -> Vec<Table> {
        self.positions
            .into_iter()
            .chain(self.magnitude)
            .chain(self.components.into_iter().flatten())
            .collect()
    }
}

impl Serialize for Streamlines {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            dimensionality: Dimensionality,
            x: &'a Table,
            y: &'a Table,
            #[serde(skip_serializing_if = "Option::is_none")]
            z: Option<&'a Table>,
            #[serde(skip_serializing_if = "Option::is_none")]
            magnitude: Option<&'a Table>,
            #[serde(skip_serializing_if = "Option::is_none")]
            u: Option<&'a Table>,
            #[serde(skip_serializing_if = "Option::is_none")]
            v: Option<&'a Table>,
            #[serde(skip_serializing_if = "Option::is_none")]
            w: Option<&'a Table>,
        }
        View {
            dimensionality: self.dimensionality,
            x: self.x(),
            y: self.y(),
            z: self.z(),
            magnitude: self.magnitude(),
            u: self.u(),
            v: self.v(),
            w: self.w(),
        }
        .serialize(serializer)
    }
}

/// Traces streamlines through one validated grid/field pair.
///
/// Construction checks the field against the grid once and fixes the
/// dimensionality; [`trace`](Self::trace) can then be called repeatedly.
#[derive(Debug, Clone, Copy)]
pub struct StreamlineTracer<'a> {
    grid: &'a RectilinearGrid,
    field: &'a VectorField,
    dimensionality: Dimensionality,
}

impl<'a> StreamlineTracer<'a> {
    /// Returns `ShapeMismatch` or `MissingComponent` if `field` does not
    /// cover `grid`'s lattice.
    pub fn new(grid: &'a RectilinearGrid, field: &'a VectorField) -> Result<Self, TraceError> {
        field.validate(grid)?;
        Ok(Self {
            grid,
            field,
            dimensionality: grid.dimensionality(),
        })
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Interpolated field vector at `point`; NaN outside the grid.
    ///
    /// Planar grids ignore `point[2]` and report a zero z component.
    pub fn sample(&self, point: [f64; 3]) -> [f64; 3] {
        match self.lattice() {
            Lattice::TwoD {
                axes,
                strides,
                components,
            } => {
                let p = [point[0], point[1]];
                [
                    multilinear(&axes, &strides, components[0], &p),
                    multilinear(&axes, &strides, components[1], &p),
                    0.0,
                ]
            }
            Lattice::ThreeD {
                axes,
                strides,
                components,
            } => {
                components.map(|c| multilinear(&axes, &strides, c, &point))
            }
        }
    }

    /// Traces one line per seed.
    ///
    /// Fails before any integration on invalid options, unequal seed
    /// lengths, or missing seed z on a spatial grid. With
    /// [`DegeneratePolicy::Reject`] it also fails on the first zero-magnitude
    /// sample.
    pub fn trace(&self, seeds: &SeedSet, options: &TraceOptions) -> Result<Streamlines, TraceError> {
        options.validate()?;
        seeds.validate()?;
        debug!(
            seeds = seeds.len(),
            steps = options.steps,
            step_length = options.step_length,
            dimensionality = ?self.dimensionality,
            "tracing streamlines"
        );
        match self.lattice() {
            Lattice::TwoD {
                axes,
                strides,
                components,
            } => integrate(
                axes,
                strides,
                components,
                [seeds.x(), seeds.y()],
                options,
                self.dimensionality,
            ),
            Lattice::ThreeD {
                axes,
                strides,
                components,
            } => {
                let z = seeds.z().ok_or(TraceError::MissingComponent("seed z"))?;
                integrate(
                    axes,
                    strides,
                    components,
                    [seeds.x(), seeds.y(), z],
                    options,
                    self.dimensionality,
                )
            }
        }
    }

    fn lattice(&self) -> Lattice<'a> {
        let [_, ny, nz] = self.grid.shape();
        let (x, y) = (self.grid.x(), self.grid.y());
        let (u, v) = (self.field.u(), self.field.v());
        match (self.grid.z(), self.field.w()) {
            (Some(z), Some(w)) if self.dimensionality == Dimensionality::ThreeD => Lattice::ThreeD {
                axes: [x, y, z],
                strides: [ny * nz, nz, 1],
                components: [u, v, w],
            },
            _ => Lattice::TwoD {
                axes: [x, y],
                strides: [ny * nz, nz],
                components: [u, v],
            },
        }
    }
}

/// Convenience wrapper: validate, then trace in one call.
pub fn trace(
    grid: &RectilinearGrid,
    field: &VectorField,
    seeds: &SeedSet,
    options: &TraceOptions,
) -> Result<Streamlines, TraceError> {
    StreamlineTracer::new(grid, field)?.trace(seeds, options)
}

/// Axes, strides and component arrays for the active dimensionality.
enum Lattice<'a> {
    TwoD {
        axes: [&'a Axis; 2],
        strides: [usize; 2],
        components: [&'a [f64]; 2],
    },
    ThreeD {
        axes: [&'a Axis; 3],
        strides: [usize; 3],
        components: [&'a [f64]; 3],
    },
}

fn integrate<const D: usize>(
    axes: [&Axis; D],
    strides: [usize; D],
    components: [&[f64]; D],
    seeds: [&[f64]; D],
    options: &TraceOptions,
    dimensionality: Dimensionality,
) -> Result<Streamlines, TraceError> {
    let rows = seeds[0].len();
    let cols = options.points_per_line()?;
    let last = options.steps;
    let flags = options.outputs;
    let record_scalars = flags.any(D);

    // Every table is sized up front, so an oversized request fails here
    // before any integration.
    let table = || Table::zeros(rows, cols).map_err(|_| TraceError::StepCountOverflow(last));
    let mut positions = (0..D).map(|_| table()).collect::<Result<Vec<_>, _>>()?;
    let mut magnitude = flags.magnitude.then(table).transpose()?;
    let mut outputs = (0..D)
        .map(|d| flags.component(d).then(table).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    let mut left_grid = 0usize;
    for s in 0..rows {
        let mut p: [f64; D] = std::array::from_fn(|d| seeds[d][s]);
        let mut outside = false;
        for i in 0..=last {
            for d in 0..D {
                positions[d].set(s, i, p[d]);
            }
            if i == last && !record_scalars {
                break;
            }

            let velocity: [f64; D] =
                std::array::from_fn(|d| multilinear(&axes, &strides, components[d], &p));
            let mag = velocity.iter().map(|c| c * c).sum::<f64>().sqrt();

            if let Some(table) = magnitude.as_mut() {
                table.set(s, i, mag);
            }
            for (table, c) in outputs.iter_mut().zip(velocity) {
                if let Some(table) = table.as_mut() {
                    table.set(s, i, c);
                }
            }
            if i == last {
                break;
            }

            if mag == 0.0 && options.on_degenerate == DegeneratePolicy::Reject {
                return Err(TraceError::DegenerateDirection { seed: s, step: i });
            }
            if mag.is_nan() && !outside {
                outside = true;
                left_grid += 1;
                tracing::trace!(seed = s, step = i, "streamline left the grid");
            }
            for d in 0..D {
                p[d] += velocity[d] * options.step_length / mag;
            }
        }
    }
    debug!(lines = rows, left_grid, "streamlines traced");

    Ok(Streamlines {
        dimensionality,
        positions,
        magnitude,
        components: outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn axis(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    fn diagonal_setup() -> (RectilinearGrid, VectorField) {
        let grid = RectilinearGrid::new_2d(axis(5), axis(5)).unwrap();
        let field = VectorField::constant(&grid, [1.0, 1.0, 0.0]);
        (grid, field)
    }

    #[test]
    fn diagonal_example_from_origin() {
        let (grid, field) = diagonal_setup();
        let seeds = SeedSet::new_2d(vec![0.0], vec![0.0]).unwrap();
        let options = TraceOptions::new(2, 2f64.sqrt()).with_outputs(OutputFlags::all());
        let lines = trace(&grid, &field, &seeds, &options).unwrap();

        for (i, expected) in [0.0, 1.0, 2.0].into_iter().enumerate() {
            assert!((lines.x().get(0, i) - expected).abs() < 1e-12);
            assert!((lines.y().get(0, i) - expected).abs() < 1e-12);
            let mag = lines.magnitude().unwrap().get(0, i);
            assert!((mag - 2f64.sqrt()).abs() < 1e-12);
            assert!((lines.u().unwrap().get(0, i) - 1.0).abs() < 1e-12);
            assert!((lines.v().unwrap().get(0, i) - 1.0).abs() < 1e-12);
        }
        assert!(lines.w().is_none(), "w is not produced in 2D");
        assert!(lines.z().is_none());
    }

    #[test]
    fn output_order_is_positions_then_requested_scalars() {
        let (grid, field) = diagonal_setup();
        let seeds = SeedSet::new_2d(vec![0.0, 1.0], vec![0.0, 0.0]).unwrap();
        let outputs = OutputFlags {
            magnitude: true,
            v: true,
            ..OutputFlags::default()
        };
        let options = TraceOptions::new(1, 1.0).with_outputs(outputs);
        let arrays = trace(&grid, &field, &seeds, &options).unwrap().into_arrays();
        assert_eq!(arrays.len(), 4);
        assert!(arrays.iter().all(|t| t.shape() == (2, 2)));
        // x, y, magnitude, v
        assert_eq!(arrays[0].get(1, 0), 1.0);
        assert!((arrays[2].get(0, 0) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(arrays[3].get(0, 1), 1.0);
    }

    #[test]
    fn zero_steps_keeps_only_seed_and_samples_it() {
        let (grid, field) = diagonal_setup();
        let seeds = SeedSet::new_2d(vec![2.5], vec![1.5]).unwrap();
        let options = TraceOptions::new(0, 0.5).with_outputs(OutputFlags::all());
        let lines = trace(&grid, &field, &seeds, &options).unwrap();
        assert_eq!(lines.points_per_line(), 1);
        assert_eq!(lines.polyline(0), vec![[2.5, 1.5, 0.0]]);
        assert!((lines.u().unwrap().get(0, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn leaving_the_grid_keeps_shape_and_goes_nan() {
        let grid = RectilinearGrid::new_2d(axis(3), axis(3)).unwrap();
        let field = VectorField::constant(&grid, [1.0, 0.0, 0.0]);
        let seeds = SeedSet::new_2d(vec![0.0], vec![1.0]).unwrap();
        let options = TraceOptions::new(5, 1.0).with_outputs(OutputFlags {
            magnitude: true,
            ..OutputFlags::default()
        });
        let lines = trace(&grid, &field, &seeds, &options).unwrap();
        assert_eq!(lines.x().shape(), (1, 6));
        assert_eq!(lines.x().row(0)[..3], [0.0, 1.0, 2.0]);
        // x = 3 is sampled outside the grid, so the next step is NaN.
        assert_eq!(lines.x().get(0, 3), 3.0);
        assert!(lines.x().get(0, 4).is_nan());
        assert!(lines.x().get(0, 5).is_nan());
        assert!(lines.magnitude().unwrap().get(0, 3).is_nan());
    }

    #[test]
    fn zero_field_propagates_nan_by_default() {
        let grid = RectilinearGrid::new_2d(axis(3), axis(3)).unwrap();
        let field = VectorField::constant(&grid, [0.0, 0.0, 0.0]);
        let seeds = SeedSet::new_2d(vec![1.0], vec![1.0]).unwrap();
        let lines = trace(&grid, &field, &seeds, &TraceOptions::new(2, 0.5)).unwrap();
        assert_eq!(lines.x().get(0, 0), 1.0);
        assert!(lines.x().get(0, 1).is_nan());
        assert!(lines.y().get(0, 2).is_nan());
    }

    #[test]
    fn zero_field_rejected_under_reject_policy() {
        let grid = RectilinearGrid::new_2d(axis(3), axis(3)).unwrap();
        let mut u = vec![1.0; 9];
        // Stagnation point at lattice node (2, 1).
        u[grid.flat_index(2, 1, 0)] = 0.0;
        let field = VectorField::new_2d(u, vec![0.0; 9]);
        let seeds = SeedSet::new_2d(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        let options = TraceOptions::new(4, 1.0).with_policy(DegeneratePolicy::Reject);
        let err = trace(&grid, &field, &seeds, &options).unwrap_err();
        assert!(matches!(err, TraceError::DegenerateDirection { seed: 1, step: 1 }));
    }

    #[test]
    fn spatial_grid_requires_seed_z() {
        let grid = RectilinearGrid::new_3d(axis(3), axis(3), axis(3)).unwrap();
        let field = VectorField::constant(&grid, [0.0, 0.0, 1.0]);
        let seeds = SeedSet::new_2d(vec![0.0], vec![0.0]).unwrap();
        let err = trace(&grid, &field, &seeds, &TraceOptions::new(1, 1.0)).unwrap_err();
        assert!(matches!(err, TraceError::MissingComponent("seed z")));
    }

    #[test]
    fn spatial_trace_follows_w() {
        let grid = RectilinearGrid::new_3d(axis(3), axis(3), axis(4)).unwrap();
        let field = VectorField::constant(&grid, [0.0, 0.0, 2.0]);
        let seeds = SeedSet::new_3d(vec![1.0], vec![1.0], vec![0.0]).unwrap();
        let options = TraceOptions::new(3, 1.0).with_outputs(OutputFlags::all());
        let lines = trace(&grid, &field, &seeds, &options).unwrap();
        assert_eq!(lines.z().unwrap().row(0), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(lines.x().row(0), &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(lines.w().unwrap().row(0), &[2.0, 2.0, 2.0, 2.0]);
        assert_eq!(lines.into_arrays().len(), 7);
    }

    #[test]
    fn invalid_options_rejected_before_tracing() {
        let (grid, field) = diagonal_setup();
        let seeds = SeedSet::new_2d(vec![0.0], vec![0.0]).unwrap();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = trace(&grid, &field, &seeds, &TraceOptions::new(3, bad));
            assert!(matches!(result, Err(TraceError::InvalidStepLength(_))));
        }
        let result = trace(&grid, &field, &seeds, &TraceOptions::new(usize::MAX, 1.0));
        assert!(matches!(result, Err(TraceError::StepCountOverflow(_))));
    }

    #[test]
    fn oversized_tables_are_an_error_not_a_panic() {
        let (grid, field) = diagonal_setup();
        let steps = usize::MAX / 2;
        // 3 rows of `steps + 1` points overflow the element count.
        let seeds = SeedSet::new_2d(vec![0.0, 1.0, 2.0], vec![0.0; 3]).unwrap();
        let result = trace(&grid, &field, &seeds, &TraceOptions::new(steps, 1.0));
        assert!(matches!(result, Err(TraceError::StepCountOverflow(n)) if n == steps));

        // One row fits the element count but not the byte size.
        let seeds = SeedSet::new_2d(vec![0.0], vec![0.0]).unwrap();
        let options = TraceOptions::new(usize::MAX / 4, 1.0).with_outputs(OutputFlags::all());
        let result = trace(&grid, &field, &seeds, &options);
        assert!(matches!(result, Err(TraceError::StepCountOverflow(_))));
    }

    #[test]
    fn mismatched_field_rejected_at_construction() {
        let grid = RectilinearGrid::new_2d(axis(3), axis(3)).unwrap();
        let field = VectorField::new_2d(vec![1.0; 9], vec![1.0; 8]);
        assert!(matches!(
            StreamlineTracer::new(&grid, &field),
            Err(TraceError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_seed_set_yields_empty_tables() {
        let (grid, field) = diagonal_setup();
        let seeds = SeedSet::new_2d(vec![], vec![]).unwrap();
        let lines = trace(&grid, &field, &seeds, &TraceOptions::new(3, 1.0)).unwrap();
        assert_eq!(lines.seed_count(), 0);
        assert_eq!(lines.x().shape(), (0, 4));
    }

    #[test]
    fn sample_matches_constant_field() {
        let (grid, field) = diagonal_setup();
        let tracer = StreamlineTracer::new(&grid, &field).unwrap();
        let [u, v, w] = tracer.sample([0.3, 3.7, 99.0]);
        assert!((u - 1.0).abs() < 1e-12 && (v - 1.0).abs() < 1e-12);
        assert_eq!(w, 0.0);
        assert!(tracer.sample([-1.0, 0.0, 0.0])[0].is_nan());
    }

    #[test]
    fn options_from_json_fills_defaults() {
        let options = TraceOptions::from_json(&json!({
            "steps": 12,
            "outputs": {"magnitude": true},
            "on_degenerate": "reject"
        }))
        .unwrap();
        assert_eq!(options.steps, 12);
        assert_eq!(options.step_length, DEFAULT_STEP_LENGTH);
        assert!(options.outputs.magnitude);
        assert!(!options.outputs.u);
        assert_eq!(options.on_degenerate, DegeneratePolicy::Reject);
    }

    #[test]
    fn options_from_json_rejects_bad_values() {
        assert!(matches!(
            TraceOptions::from_json(&json!({"steps": "many"})),
            Err(TraceError::InvalidParams(_))
        ));
        assert!(matches!(
            TraceOptions::from_json(&json!({"step_length": -2.0})),
            Err(TraceError::InvalidStepLength(_))
        ));
    }

    #[test]
    fn streamlines_json_omits_unrequested_tables() {
        let (grid, field) = diagonal_setup();
        let seeds = SeedSet::new_2d(vec![0.0], vec![0.0]).unwrap();
        let options = TraceOptions::new(1, 1.0).with_outputs(OutputFlags {
            u: true,
            ..OutputFlags::default()
        });
        let lines = trace(&grid, &field, &seeds, &options).unwrap();
        let v = serde_json::to_value(&lines).unwrap();
        assert_eq!(v["dimensionality"], "two-d");
        assert!(v.get("x").is_some());
        assert!(v.get("u").is_some());
        assert!(v.get("z").is_none());
        assert!(v.get("magnitude").is_none());
        assert!(v.get("v").is_none());
    }
}
