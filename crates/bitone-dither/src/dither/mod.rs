//! Error diffusion dithering.
//!
//! The engine walks the image in raster order (left to right, top to
//! bottom). Every pixel has its pending error added, is clamped to 0..=255,
//! quantized to the nearest palette color, and then hands its quantization
//! error to the unvisited neighbors named by the [`Kernel`]. Shares aimed
//! outside the image are dropped.
//!
//! # Architecture
//!
//! Algorithms implement the [`Dither`] trait. [`FloydSteinberg`] is the
//! only implementor; it runs the shared [`dither_with_kernel`] loop with
//! the [`FLOYD_STEINBERG`] kernel. Border handling is chosen through
//! [`EdgeStrategy`] in [`DitherOptions`].
//!
//! # Example
//!
//! ```
//! use bitone_dither::{Dither, DitherOptions, FloydSteinberg, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::black_and_white();
//! let mut image = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128)).unwrap();
//!
//! let stats = FloydSteinberg.dither(&mut image, &palette, &DitherOptions::new());
//! assert_eq!(stats.pixels, 16);
//! assert!(image.pixels().all(|p| palette.contains(p)));
//! ```

mod floyd_steinberg;
mod kernel;
mod options;
mod padded;

pub use floyd_steinberg::{diffuse, FloydSteinberg};
pub use kernel::*;
pub use options::{DitherOptions, EdgeStrategy, Rounding};

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

/// Trait for error diffusion dithering algorithms.
///
/// Implementors quantize `image` in place against `palette`. After the call
/// every pixel of `image` is a palette color.
pub trait Dither {
    /// Dither an image in place.
    ///
    /// # Arguments
    ///
    /// * `image` - Pixels to quantize; overwritten with palette colors
    /// * `palette` - Color palette for quantization
    /// * `options` - Dithering configuration
    ///
    /// # Returns
    ///
    /// Statistics about the pass, see [`DiffusionStats`].
    fn dither(
        &self,
        image: &mut PixelBuffer,
        palette: &Palette,
        options: &DitherOptions,
    ) -> DiffusionStats;
}

/// Summary of one dithering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffusionStats {
    /// Number of pixels quantized.
    pub pixels: usize,
    /// Per-channel sum of absolute error shares that targeted a position
    /// outside the image and were discarded.
    pub dropped_error: [u64; 3],
}

impl DiffusionStats {
    #[inline]
    fn record_dropped(&mut self, share: [i32; 3]) {
        for c in 0..3 {
            self.dropped_error[c] += share[c].unsigned_abs() as u64;
        }
    }
}

/// Error buffer for error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`). This avoids
/// allocating a full-image error buffer.
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Consume accumulated error with `take_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<[i32; 3]>>,
    /// Image width
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels
    /// * `row_depth` - Number of rows to track (kernel's `max_dy + 1`)
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0; 3]; width]).collect(),
            width,
        }
    }

    /// Get accumulated error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [i32; 3] {
        self.rows[0][x]
    }

    /// Return and reset the accumulated error for a pixel in the current row.
    #[inline]
    pub fn take_accumulated(&mut self, x: usize) -> [i32; 3] {
        std::mem::take(&mut self.rows[0][x])
    }

    /// Add error to a future pixel.
    ///
    /// # Arguments
    ///
    /// * `x` - Target pixel x-coordinate
    /// * `row_offset` - Row offset (0 = current row, 1 = next row, etc.)
    /// * `error` - RGB error values to add
    ///
    /// Returns `false` and leaves the buffer untouched if the target is out
    /// of bounds.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [i32; 3]) -> bool {
        if x < self.width && row_offset < self.rows.len() {
            let cell = &mut self.rows[row_offset][x];
            for c in 0..3 {
                cell[c] += error[c];
            }
            true
        } else {
            false
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the row buffer: the first row is discarded, subsequent rows
    /// shift forward, and a new zeroed row is added at the end.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0; 3]);
        }
    }
}

/// Core error diffusion algorithm parameterized by kernel.
///
/// Dispatches on [`DitherOptions::edge_strategy`]; the two strategies give
/// identical pixels and identical [`DiffusionStats`].
///
/// # Arguments
///
/// * `image` - Pixels to quantize in place
/// * `palette` - Color palette for quantization
/// * `kernel` - Error diffusion kernel to use
/// * `options` - Dithering configuration
pub fn dither_with_kernel(
    image: &mut PixelBuffer,
    palette: &Palette,
    kernel: &Kernel,
    options: &DitherOptions,
) -> DiffusionStats {
    match options.edge_strategy {
        EdgeStrategy::RowBuffer => dither_row_buffer(image, palette, kernel, options.rounding),
        EdgeStrategy::Padded => padded::dither_padded(image, palette, kernel, options.rounding),
    }
}

fn dither_row_buffer(
    image: &mut PixelBuffer,
    palette: &Palette,
    kernel: &Kernel,
    rounding: Rounding,
) -> DiffusionStats {
    let width = image.width();
    let height = image.height();
    let mut stats = DiffusionStats {
        pixels: image.pixel_count(),
        ..Default::default()
    };

    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);

    for y in 0..height {
        for x in 0..width {
            let pending = error_buf.take_accumulated(x);
            let pixel = image.pixel(x, y).saturating_add_error(pending);

            let quantized = palette.nearest(pixel);
            image.set_pixel(x, y, quantized);

            let error = pixel.error_from(quantized);
            if error == [0; 3] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let share = rounding.scale_rgb(error, weight, kernel.divisor);
                let target = x
                    .checked_add_signed(dx as isize)
                    .filter(|_| y + (dy as usize) < height);
                let kept = match target {
                    Some(nx) => error_buf.add_error(nx, dy as usize, share),
                    None => false,
                };
                if !kept {
                    stats.record_dropped(share);
                }
            }
        }

        error_buf.advance_row();
    }

    stats
}
