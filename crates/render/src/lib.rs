#![deny(unsafe_code)]
//! Raster rendering of traced streamlines.
//!
//! Sits on top of `streamline-core`: projects lines onto the xy plane,
//! colors them by a traced scalar through a [`Colormap`], and optionally
//! writes PNG snapshots (feature `png`).

pub mod colormap;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use colormap::{Colormap, Rgb8};
pub use pixel::{rasterize, ColorBy, RasterView};
