//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg is the most widely known error diffusion algorithm.
//! It distributes 100% of the quantization error to 4 neighbors.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{dither_with_kernel, DiffusionStats, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
///
/// # Example
///
/// ```
/// use bitone_dither::{Dither, DitherOptions, FloydSteinberg, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::black_and_white();
/// let mut image = PixelBuffer::filled(8, 8, Rgb::new(90, 90, 90)).unwrap();
/// FloydSteinberg.dither(&mut image, &palette, &DitherOptions::new());
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        image: &mut PixelBuffer,
        palette: &Palette,
        options: &DitherOptions,
    ) -> DiffusionStats {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG, options)
    }
}

/// Dither `image` in place with default options.
///
/// Shorthand for `FloydSteinberg.dither(image, palette, &DitherOptions::new())`
/// for callers that do not need the stats.
pub fn diffuse(image: &mut PixelBuffer, palette: &Palette) {
    FloydSteinberg.dither(image, palette, &DitherOptions::new());
}
