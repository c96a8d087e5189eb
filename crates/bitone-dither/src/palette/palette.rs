//! Palette struct with nearest-color matching.
//!
//! This module provides the `Palette` type: an ordered, non-empty list of
//! distinct RGB colors, and the color quantizer that maps any pixel to its
//! closest entry.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// An ordered, validated color palette.
///
/// A `Palette` can only be built through [`Palette::new`] (or the parsing
/// helpers that delegate to it), which rejects empty lists and duplicate
/// colors. Code that holds a `Palette` can therefore always quantize.
///
/// The default palette is pure black followed by pure white.
///
/// # Example
///
/// ```
/// use bitone_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb::new(200, 190, 210)), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a new palette from a list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::DuplicateColor`] if a color appears twice; the
    ///   index is that of the second occurrence
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The two-color black and white palette.
    pub fn black_and_white() -> Self {
        Self {
            colors: vec![Rgb::BLACK, Rgb::WHITE],
        }
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for palette validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use bitone_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All palette colors in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns true if `color` is exactly one of the palette entries.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Returns `(index, squared_distance)`. Distances are squared Euclidean
    /// in RGB space. The scan keeps the first minimum, so on a tie the
    /// earlier palette entry wins.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Quantize `color` to its nearest palette entry.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        self.colors[self.find_nearest(color).0]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::black_and_white()
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse a comma-separated list of hex colors, e.g. `"#000,#fff"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();
        Palette::from_hex(&entries)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "#{:02X}{:02X}{:02X}", c.r, c.g, c.b)?;
        }
        Ok(())
    }
}
