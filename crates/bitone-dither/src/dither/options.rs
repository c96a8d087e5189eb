//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct for configuring
//! error diffusion behavior, together with the two choices it carries:
//! the [`Rounding`] rule for error shares and the [`EdgeStrategy`] used
//! at image borders.

/// Integer rounding rule for a neighbor's share of the error.
///
/// Both rules divide with truncation toward zero; `Nearest` adds half the
/// divisor to the numerator first. They differ by at most one level per
/// share, which is enough to change individual output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// `error * weight / divisor`
    #[default]
    Truncate,
    /// `(error * weight + divisor / 2) / divisor`
    Nearest,
}

impl Rounding {
    /// Scale one channel of error by `weight / divisor`.
    ///
    /// ```
    /// use bitone_dither::Rounding;
    ///
    /// assert_eq!(Rounding::Truncate.scale(100, 7, 16), 43);
    /// assert_eq!(Rounding::Nearest.scale(100, 7, 16), 44);
    /// assert_eq!(Rounding::Truncate.scale(-100, 7, 16), -43);
    /// ```
    #[inline]
    pub fn scale(self, error: i32, weight: i32, divisor: i32) -> i32 {
        match self {
            Rounding::Truncate => error * weight / divisor,
            Rounding::Nearest => (error * weight + divisor / 2) / divisor,
        }
    }

    /// Scale all three channels.
    #[inline]
    pub fn scale_rgb(self, error: [i32; 3], weight: u8, divisor: u8) -> [i32; 3] {
        let (w, d) = (weight as i32, divisor as i32);
        [
            self.scale(error[0], w, d),
            self.scale(error[1], w, d),
            self.scale(error[2], w, d),
        ]
    }
}

/// How diffusion treats neighbors that fall outside the image.
///
/// Both strategies drop the error aimed outside the image and produce
/// byte-identical output. They differ only in memory use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStrategy {
    /// Sliding accumulator of `max_dy + 1` rows with inline bounds checks.
    ///
    /// Extra memory is O(width).
    #[default]
    RowBuffer,
    /// Full working frame with a black margin around the image.
    ///
    /// Only the interior is dithered; the margin absorbs out-of-image
    /// error and is cropped away. Extra memory is O(width * height).
    Padded,
}

/// Configuration options for error diffusion dithering.
///
/// # Defaults
///
/// - Rounding: [`Rounding::Truncate`]
/// - Edge strategy: [`EdgeStrategy::RowBuffer`]
///
/// # Example
///
/// ```
/// use bitone_dither::{DitherOptions, EdgeStrategy, Rounding};
///
/// let options = DitherOptions::new()
///     .rounding(Rounding::Nearest)
///     .edge_strategy(EdgeStrategy::Padded);
/// assert_eq!(options.rounding, Rounding::Nearest);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DitherOptions {
    /// Rounding rule for each neighbor's error share.
    pub rounding: Rounding,

    /// Border handling implementation.
    pub edge_strategy: EdgeStrategy,
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rounding rule.
    #[inline]
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the border handling strategy.
    #[inline]
    pub fn edge_strategy(mut self, strategy: EdgeStrategy) -> Self {
        self.edge_strategy = strategy;
        self
    }
}
