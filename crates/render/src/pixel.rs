//! Pure-computation rasterization of [`Streamlines`] into an RGBA8 buffer.
//!
//! This module is always available (no feature gate) so callers can get
//! pixels without pulling in the `image` crate. Lines are projected onto
//! the xy plane; segments with a non-finite endpoint are skipped, which
//! renders lines that left the grid as gaps.

use crate::colormap::{Colormap, Rgb8};
use streamline_core::{RectilinearGrid, Streamlines, Table, TraceError};
use tracing::debug;

const COLOR_BY_NAMES: &[&str] = &["magnitude", "u", "v", "w", "uniform"];

/// Which per-point scalar drives line color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBy {
    #[default]
    Magnitude,
    U,
    V,
    W,
    /// A single color: the top of the colormap.
    Uniform,
}

impl ColorBy {
    pub fn from_name(name: &str) -> Result<Self, TraceError> {
        match name {
            "magnitude" => Ok(ColorBy::Magnitude),
            "u" => Ok(ColorBy::U),
            "v" => Ok(ColorBy::V),
            "w" => Ok(ColorBy::W),
            "uniform" => Ok(ColorBy::Uniform),
            _ => Err(TraceError::InvalidParams(format!("unknown color source: {name}"))),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        COLOR_BY_NAMES
    }

    /// The scalar table this choice reads, if it was traced.
    fn table(self, lines: &Streamlines) -> Option<&Table> {
        match self {
            ColorBy::Magnitude => lines.magnitude(),
            ColorBy::U => lines.u(),
            ColorBy::V => lines.v(),
            ColorBy::W => lines.w(),
            ColorBy::Uniform => None,
        }
    }
}

/// Maps the world rectangle `x_range` × `y_range` onto a pixel canvas,
/// with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterView {
    pub width: usize,
    pub height: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl RasterView {
    /// Returns `InvalidParams` for zero dimensions or empty/non-finite ranges.
    pub fn new(
        width: usize,
        height: usize,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Result<Self, TraceError> {
        if width == 0 || height == 0 {
            return Err(TraceError::InvalidParams(
                "raster width and height must be non-zero".to_string(),
            ));
        }
        for (lo, hi) in [x_range, y_range] {
            if !(lo.is_finite() && hi.is_finite() && hi > lo) {
                return Err(TraceError::InvalidParams(format!(
                    "invalid view range ({lo}, {hi})"
                )));
            }
        }
        Ok(Self {
            width,
            height,
            x_range,
            y_range,
        })
    }

    /// A view covering the grid's xy bounding box.
    pub fn fit_grid(grid: &RectilinearGrid, width: usize, height: usize) -> Result<Self, TraceError> {
        Self::new(width, height, grid.x().bounds(), grid.y().bounds())
    }

    /// Continuous pixel coordinates of world point `(x, y)`.
    fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let px = (x - x0) / (x1 - x0) * (self.width - 1) as f64;
        let py = (y1 - y) / (y1 - y0) * (self.height - 1) as f64;
        (px, py)
    }
}

/// Draws every streamline into a transparent `width * height * 4` buffer.
///
/// Each segment takes the color of the scalar sampled at its start point,
/// normalized over the finite values of the chosen table. A scalar that was
/// not traced falls back to [`ColorBy::Uniform`].
pub fn rasterize(
    lines: &Streamlines,
    view: &RasterView,
    color_by: ColorBy,
    colormap: &Colormap,
) -> Vec<u8> {
    let mut canvas = Canvas {
        width: view.width,
        height: view.height,
        rgba: vec![0; view.width * view.height * 4],
    };
    let scalars = color_by.table(lines);
    if scalars.is_none() && color_by != ColorBy::Uniform {
        debug!(?color_by, "scalar not traced, drawing uniform color");
    }
    let (lo, hi) = scalars.map_or((0.0, 1.0), finite_range);
    let color_at = |seed: usize, i: usize| -> Rgb8 {
        match scalars {
            Some(table) if hi > lo => colormap.sample((table.get(seed, i) - lo) / (hi - lo)),
            Some(_) => colormap.sample(0.5),
            None => colormap.sample(1.0),
        }
    };

    for seed in 0..lines.seed_count() {
        let points = lines.polyline(seed);
        if let [only] = points.as_slice() {
            if only[0].is_finite() && only[1].is_finite() {
                let (px, py) = view.to_pixel(only[0], only[1]);
                canvas.plot(px, py, color_at(seed, 0));
            }
            continue;
        }
        for (i, pair) in points.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            if !(a[0].is_finite() && a[1].is_finite() && b[0].is_finite() && b[1].is_finite()) {
                continue;
            }
            let (ax, ay) = view.to_pixel(a[0], a[1]);
            let (bx, by) = view.to_pixel(b[0], b[1]);
            canvas.segment(ax, ay, bx, by, color_at(seed, i));
        }
    }
    canvas.rgba
}

/// Min and max over finite entries; `(0, 0)` when there are none.
fn finite_range(table: &Table) -> (f64, f64) {
    table
        .data()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

struct Canvas {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl Canvas {
    fn plot(&mut self, px: f64, py: f64, color: Rgb8) {
        let (x, y) = (px.round(), py.round());
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        self.rgba[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    /// DDA line from `(ax, ay)` to `(bx, by)`, endpoints included.
    fn segment(&mut self, ax: f64, ay: f64, bx: f64, by: f64, color: Rgb8) {
        let (dx, dy) = (bx - ax, by - ay);
        // Clipped by `plot`; cap the walk for segments far off-canvas.
        let steps = dx.abs().max(dy.abs()).ceil().clamp(1.0, 4.0 * (self.width + self.height) as f64);
        let n = steps as usize;
        for k in 0..=n {
            let t = k as f64 / steps;
            self.plot(ax + dx * t, ay + dy * t, color);
        }
    }
}
