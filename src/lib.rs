//! Bitone - two-color Floyd-Steinberg dithering
//!
//! Decodes an image file, dithers it against a fixed palette and writes an
//! RGB PNG. This library exposes modules for integration testing.

pub mod error;
pub mod rendering;
pub mod services;
