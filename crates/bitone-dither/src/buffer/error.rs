//! Error type for pixel buffer construction.

use std::fmt;

/// Error type for [`PixelBuffer`](super::PixelBuffer) construction.
///
/// Returned when dimensions are degenerate or do not match the supplied
/// byte data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// `width * height * 3` does not fit in `usize`
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Raw data length is not `width * height * 3`
    LengthMismatch {
        /// Byte length implied by the dimensions
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "invalid image dimensions {}x{}", width, height)
            }
            BufferError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
