#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! bitone-dither: two-color Floyd-Steinberg dithering
//!
//! This library reduces an 8-bit RGB image to a small fixed palette
//! (black and white by default) with Floyd-Steinberg error diffusion. The
//! image is mutated in place.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use bitone_dither::{Ditherer, Palette, PixelBuffer, Rgb};
//!
//! let ditherer = Ditherer::new(Palette::black_and_white());
//!
//! let mut image = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128)).unwrap();
//! ditherer.dither(&mut image);
//!
//! assert!(image.pixels().all(|p| p == Rgb::BLACK || p == Rgb::WHITE));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! for each pixel in raster order:
//!     value     = clamp(stored + pending error)
//!     quantized = palette.nearest(value)      (squared RGB distance)
//!     stored    = quantized
//!     error     = value - quantized
//!     push error * 7/16, 3/16, 5/16, 1/16 to unvisited neighbors
//! ```
//!
//! Error shares use integer arithmetic. [`Rounding::Truncate`] (default)
//! divides with truncation; [`Rounding::Nearest`] adds half the divisor
//! first. Shares that would land outside the image are dropped.
//!
//! # Border Handling
//!
//! [`EdgeStrategy::RowBuffer`] (default) keeps a two-row error accumulator
//! and bounds-checks every target. [`EdgeStrategy::Padded`] dithers a
//! black-margined working copy and crops it. Both produce identical output.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod palette;


pub use api::{DitherError, Ditherer};
pub use buffer::{BufferError, PixelBuffer};
pub use color::Rgb;
pub use dither::{
    diffuse, DiffusionStats, Dither, DitherOptions, EdgeStrategy, FloydSteinberg, Rounding,
};
pub use palette::{Palette, PaletteError, ParseColorError};
