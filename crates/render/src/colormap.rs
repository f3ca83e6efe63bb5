//! Sequential colormaps for coloring lines by a scalar.

use streamline_core::TraceError;

/// All recognized colormap names.
const COLORMAP_NAMES: &[&str] = &["viridis", "magma", "gray"];

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Evenly spaced color stops, linearly interpolated in sRGB.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    stops: Vec<Rgb8>,
}

impl Colormap {
    /// Requires at least one stop.
    pub fn new(stops: Vec<Rgb8>) -> Result<Self, TraceError> {
        if stops.is_empty() {
            return Err(TraceError::InvalidParams(
                "colormap requires at least 1 stop".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    pub fn viridis() -> Self {
        Self {
            stops: vec![
                Rgb8::new(68, 1, 84),
                Rgb8::new(59, 82, 139),
                Rgb8::new(33, 145, 140),
                Rgb8::new(94, 201, 98),
                Rgb8::new(253, 231, 37),
            ],
        }
    }

    pub fn magma() -> Self {
        Self {
            stops: vec![
                Rgb8::new(0, 0, 4),
                Rgb8::new(81, 18, 124),
                Rgb8::new(183, 55, 121),
                Rgb8::new(252, 137, 97),
                Rgb8::new(252, 253, 191),
            ],
        }
    }

    pub fn gray() -> Self {
        Self {
            stops: vec![Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)],
        }
    }

    /// Looks up a built-in colormap by name.
    pub fn from_name(name: &str) -> Result<Self, TraceError> {
        match name {
            "viridis" => Ok(Self::viridis()),
            "magma" => Ok(Self::magma()),
            "gray" => Ok(Self::gray()),
            _ => Err(TraceError::InvalidParams(format!("unknown colormap: {name}"))),
        }
    }

    /// Returns a slice of all built-in colormap names.
    pub fn list_names() -> &'static [&'static str] {
        COLORMAP_NAMES
    }

    /// Samples the colormap at `t`, clamped to [0, 1]; NaN maps to 0.
    pub fn sample(&self, t: f64) -> Rgb8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;
        let (a, b) = (self.stops[idx], self.stops[idx + 1]);
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
        Rgb8::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
    }
}
