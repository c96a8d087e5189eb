//! Color types
//!
//! The engine works on plain 8-bit RGB. There are no color-space
//! conversions: distances and errors are computed on the stored channel
//! values directly.
//!
//! # Example
//!
//! ```
//! use bitone_dither::Rgb;
//!
//! let gray = Rgb::new(128, 128, 128);
//! assert!(gray.distance_squared(Rgb::WHITE) < gray.distance_squared(Rgb::BLACK));
//! ```

mod rgb;

pub use rgb::Rgb;
