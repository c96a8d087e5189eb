//! Public API for the bitone-dither crate.
//!
//! This module provides the high-level API: [`Ditherer`] builder and
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::Ditherer;
pub use error::DitherError;
