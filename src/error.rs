use std::path::PathBuf;

use bitone_dither::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Failed to decode input {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to write output {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] BufferError),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Image too large for PNG: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("PNG encode error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
