//! Image buffer types
//!
//! [`PixelBuffer`] is the mutable image the engine dithers in place. It
//! keeps the plain row-major `RGBRGB...` layout decoders and encoders
//! expect, and exposes it through `(x, y)` accessors instead of raw
//! offsets.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::{PixelBuffer, CHANNELS};
