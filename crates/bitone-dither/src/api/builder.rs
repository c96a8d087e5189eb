//! Ditherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Ditherer`] bundles a palette with dithering options behind a fluent
//! builder.

use crate::buffer::PixelBuffer;
use crate::dither::{
    DiffusionStats, Dither, DitherOptions, EdgeStrategy, FloydSteinberg, Rounding,
};
use crate::palette::Palette;

use super::DitherError;

/// High-level Floyd-Steinberg ditherer.
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self` so the builder is reusable
///   across multiple images
///
/// # Example
///
/// ```
/// use bitone_dither::{Ditherer, EdgeStrategy, Palette, PixelBuffer, Rgb, Rounding};
///
/// let ditherer = Ditherer::new(Palette::black_and_white())
///     .rounding(Rounding::Nearest)
///     .edge_strategy(EdgeStrategy::Padded);
///
/// let mut image = PixelBuffer::filled(2, 2, Rgb::new(128, 128, 128)).unwrap();
/// let stats = ditherer.dither(&mut image);
///
/// assert_eq!(stats.pixels, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette,
    options: DitherOptions,
}

impl Ditherer {
    /// Create a ditherer with the given palette and default options.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: DitherOptions::new(),
        }
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the rounding rule for error shares.
    #[inline]
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.options = self.options.rounding(rounding);
        self
    }

    /// Set the border handling strategy.
    #[inline]
    pub fn edge_strategy(mut self, strategy: EdgeStrategy) -> Self {
        self.options = self.options.edge_strategy(strategy);
        self
    }

    /// The palette every image is quantized against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The current options.
    #[inline]
    pub fn dither_options(&self) -> &DitherOptions {
        &self.options
    }

    /// Dither `image` in place.
    pub fn dither(&self, image: &mut PixelBuffer) -> DiffusionStats {
        FloydSteinberg.dither(image, &self.palette, &self.options)
    }

    /// Dither raw interleaved RGB bytes and return the resulting buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::Buffer`] if the dimensions are zero or do not
    /// match `data.len()`.
    pub fn dither_bytes(
        &self,
        width: usize,
        height: usize,
        data: Vec<u8>,
    ) -> Result<PixelBuffer, DitherError> {
        let mut image = PixelBuffer::from_raw(width, height, data)?;
        self.dither(&mut image);
        Ok(image)
    }
}

impl Default for Ditherer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferError;
    use crate::color::Rgb;

    #[test]
    fn test_builder_sets_options() {
        let ditherer = Ditherer::default()
            .rounding(Rounding::Nearest)
            .edge_strategy(EdgeStrategy::Padded);

        assert_eq!(ditherer.dither_options().rounding, Rounding::Nearest);
        assert_eq!(ditherer.dither_options().edge_strategy, EdgeStrategy::Padded);
        assert_eq!(ditherer.palette(), &Palette::black_and_white());
    }

    #[test]
    fn test_options_replaces_everything() {
        let opts = DitherOptions::new().rounding(Rounding::Nearest);
        let ditherer = Ditherer::default()
            .edge_strategy(EdgeStrategy::Padded)
            .options(opts);
        assert_eq!(ditherer.dither_options(), &opts);
    }

    #[test]
    fn test_ditherer_is_reusable() {
        let ditherer = Ditherer::default();
        let source = PixelBuffer::filled(7, 7, Rgb::new(30, 160, 90)).unwrap();

        let mut first = source.clone();
        let mut second = source;
        ditherer.dither(&mut first);
        ditherer.dither(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_dither_bytes() {
        let ditherer = Ditherer::default();
        let image = ditherer.dither_bytes(1, 1, vec![10, 20, 30]).unwrap();
        assert_eq!(image.as_bytes(), &[0, 0, 0]);
    }

    #[test]
    fn test_dither_bytes_rejects_bad_length() {
        let ditherer = Ditherer::default();
        let err = ditherer.dither_bytes(2, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(
            err,
            DitherError::Buffer(BufferError::LengthMismatch {
                expected: 12,
                actual: 5
            })
        ));
    }
}
