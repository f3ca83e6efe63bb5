//! PNG snapshots of rasterized streamlines.
//!
//! This module is feature-gated behind `png` (default on) so that callers
//! wanting only the raw buffer do not pull in the `image` crate. The
//! rasterization itself lives in [`crate::pixel`] (always available).

use std::path::Path;
use streamline_core::{Streamlines, TraceError};

use crate::colormap::Colormap;
use crate::pixel::{rasterize, ColorBy, RasterView};

/// Rasterizes `lines` through `view` and writes the result as a PNG.
///
/// Returns `TraceError::InvalidParams` if the view dimensions overflow
/// `u32`, or `TraceError::Io` on write failure.
pub fn write_png(
    lines: &Streamlines,
    view: &RasterView,
    color_by: ColorBy,
    colormap: &Colormap,
    path: &Path,
) -> Result<(), TraceError> {
    let rgba = rasterize(lines, view, color_by, colormap);
    let w = u32::try_from(view.width)
        .map_err(|_| TraceError::InvalidParams("raster width exceeds u32".into()))?;
    let h = u32::try_from(view.height)
        .map_err(|_| TraceError::InvalidParams("raster height exceeds u32".into()))?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| TraceError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| TraceError::Io(e.to_string()))
}
