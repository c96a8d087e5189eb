//! Error diffusion kernel definition.
//!
//! A kernel specifies how the quantization error of one pixel is shared
//! among neighbors that have not been processed yet.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` and an integer weight. A neighbor
/// receives `error * weight / divisor`, rounded according to
/// [`Rounding`](super::Rounding).
///
/// # Buffer Sizing
///
/// The `max_dy` field indicates how many rows ahead the kernel reaches,
/// which determines the error buffer depth needed: `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (0 = current row, positive = rows below)
    /// - `weight`: numerator of the share this neighbor receives
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Largest horizontal or vertical distance any entry reaches.
    ///
    /// This is the margin width a padded frame needs so that every
    /// target of an interior pixel is addressable.
    pub fn reach(&self) -> usize {
        self.entries
            .iter()
            .map(|&(dx, dy, _)| dx.unsigned_abs().max(dy.unsigned_abs()) as usize)
            .max()
            .unwrap_or(0)
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};
