//! Palette types and the color quantizer
//!
//! This module provides the validated [`Palette`] type, its nearest-color
//! search, and error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
