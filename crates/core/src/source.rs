//! Analytic flow sources and their sampling onto a grid.
//!
//! A [`FlowSource`] gives a velocity at any point in space. Sources are
//! deterministic and are only used to synthesize [`VectorField`] samples;
//! tracing itself always works from the sampled lattice.

use crate::error::TraceError;
use crate::field::VectorField;
use crate::grid::{Dimensionality, RectilinearGrid};
use glam::DVec3;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Distances below this are treated as zero.
const SINGULARITY_EPS: f64 = 1e-10;

/// All recognized source names, in `kind` spelling.
const SOURCE_NAMES: &[&str] = &["uniform", "vortex", "attractor", "curl-noise", "composite"];

/// A continuous velocity field.
pub trait FlowSource: Send + Sync {
    /// Velocity at `p`.
    fn velocity(&self, p: DVec3) -> DVec3;
}

/// The same velocity everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Uniform {
    pub velocity: [f64; 3],
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            velocity: [1.0, 0.0, 0.0],
        }
    }
}

/// Counter-clockwise rotation about an axis parallel to z, with Gaussian
/// falloff and an optional constant axial velocity (`lift`) for helices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vortex {
    pub center: [f64; 2],
    pub strength: f64,
    pub radius: f64,
    pub lift: f64,
}

impl Default for Vortex {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            strength: 1.0,
            radius: 1.0,
            lift: 0.0,
        }
    }
}

/// Pulls toward a point with `strength / (1 + dist / radius)` falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointAttractor {
    pub center: [f64; 3],
    pub strength: f64,
    pub radius: f64,
}

impl Default for PointAttractor {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            strength: 1.0,
            radius: 1.0,
        }
    }
}

/// Parameters for [`CurlNoise`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurlNoiseParams {
    pub scale: f64,
    pub strength: f64,
    pub seed: u32,
}

impl Default for CurlNoiseParams {
    fn default() -> Self {
        Self {
            scale: 0.5,
            strength: 1.0,
            seed: 0,
        }
    }
}

/// Curl of a Perlin potential in the xy plane: divergence-free horizontal
/// flow whose pattern varies with z.
pub struct CurlNoise {
    noise: Perlin,
    params: CurlNoiseParams,
    eps: f64,
}

impl CurlNoise {
    /// Creates a curl noise source with a finite-difference epsilon of 0.001.
    pub fn new(params: CurlNoiseParams) -> Self {
        Self {
            noise: Perlin::new(params.seed),
            params,
            eps: 0.001,
        }
    }
}

/// Sums the velocities of several sources.
#[derive(Default)]
pub struct Composite {
    sources: Vec<Box<dyn FlowSource>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source (builder pattern).
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, source: Box<dyn FlowSource>) -> Self {
        self.sources.push(source);
        self
    }
}

impl FlowSource for Uniform {
    fn velocity(&self, _p: DVec3) -> DVec3 {
        DVec3::from_array(self.velocity)
    }
}

impl FlowSource for Vortex {
    fn velocity(&self, p: DVec3) -> DVec3 {
        let rx = p.x - self.center[0];
        let ry = p.y - self.center[1];
        let dist_sq = rx * rx + ry * ry;
        let dist = dist_sq.sqrt();
        if dist < SINGULARITY_EPS || self.radius.abs() < SINGULARITY_EPS {
            return DVec3::new(0.0, 0.0, self.lift);
        }
        let falloff = (-dist_sq / (2.0 * self.radius * self.radius)).exp();
        let swirl = self.strength * falloff / dist;
        DVec3::new(-ry * swirl, rx * swirl, self.lift)
    }
}

impl FlowSource for PointAttractor {
    fn velocity(&self, p: DVec3) -> DVec3 {
        let toward = DVec3::from_array(self.center) - p;
        let dist = toward.length();
        if dist < SINGULARITY_EPS || self.radius.abs() < SINGULARITY_EPS {
            return DVec3::ZERO;
        }
        toward / dist * (self.strength / (1.0 + dist / self.radius))
    }
}

impl FlowSource for CurlNoise {
    fn velocity(&self, p: DVec3) -> DVec3 {
        let s = p * self.params.scale;
        let eps = self.eps * self.params.scale;
        if eps.abs() < SINGULARITY_EPS {
            return DVec3::ZERO;
        }
        // Curl of a scalar potential F in the plane: (dF/dy, -dF/dx).
        let f = |q: DVec3| self.noise.get(q.to_array());
        let df_dy = (f(s + DVec3::Y * eps) - f(s - DVec3::Y * eps)) / (2.0 * eps);
        let df_dx = (f(s + DVec3::X * eps) - f(s - DVec3::X * eps)) / (2.0 * eps);
        DVec3::new(df_dy, -df_dx, 0.0) * self.params.strength
    }
}

impl FlowSource for Composite {
    fn velocity(&self, p: DVec3) -> DVec3 {
        self.sources.iter().map(|s| s.velocity(p)).sum()
    }
}

/// Serializable description of a flow source, tagged by `kind`.
///
/// `composite` nests further descriptions under `sources`:
/// `{"kind": "composite", "sources": [{"kind": "vortex"}, {"kind": "uniform"}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SourceSpec {
    Uniform(Uniform),
    Vortex(Vortex),
    Attractor(PointAttractor),
    CurlNoise(CurlNoiseParams),
    Composite {
        #[serde(default)]
        sources: Vec<SourceSpec>,
    },
}

impl SourceSpec {
    /// Builds a source description from a name and a JSON parameter object.
    ///
    /// Missing parameters take their defaults. Returns
    /// `TraceError::UnknownSource` for unrecognized names and
    /// `TraceError::InvalidParams` when the parameters do not decode.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, TraceError> {
        if !SOURCE_NAMES.contains(&name) {
            return Err(TraceError::UnknownSource(name.to_string()));
        }
        let mut object = match params {
            Value::Null => serde_json::Map::new(),
            Value::Object(map) => map.clone(),
            other => {
                return Err(TraceError::InvalidParams(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };
        object.insert("kind".to_string(), Value::String(name.to_string()));
        serde_json::from_value(Value::Object(object))
            .map_err(|e| TraceError::InvalidParams(e.to_string()))
    }

    /// Returns a slice of all recognized source names.
    pub fn list_names() -> &'static [&'static str] {
        SOURCE_NAMES
    }

    pub fn build(&self) -> Box<dyn FlowSource> {
        match self {
            SourceSpec::Uniform(s) => Box::new(*s),
            SourceSpec::Vortex(s) => Box::new(*s),
            SourceSpec::Attractor(s) => Box::new(*s),
            SourceSpec::CurlNoise(p) => Box::new(CurlNoise::new(*p)),
            SourceSpec::Composite { sources } => Box::new(
                sources
                    .iter()
                    .fold(Composite::new(), |sum, spec| sum.add(spec.build())),
            ),
        }
    }
}

/// Evaluates `source` at every lattice point of `grid`.
///
/// Planar grids get `u` and `v` only.
pub fn sample_onto(grid: &RectilinearGrid, source: &dyn FlowSource) -> VectorField {
    let [nx, ny, nz] = grid.shape();
    let n = grid.point_count();
    let (mut u, mut v, mut w) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let vel = source.velocity(DVec3::from_array(grid.point(i, j, k)));
                u.push(vel.x);
                v.push(vel.y);
                w.push(vel.z);
            }
        }
    }
    match grid.dimensionality() {
        Dimensionality::TwoD => VectorField::new_2d(u, v),
        Dimensionality::ThreeD => VectorField::new_3d(u, v, w),
    }
}
