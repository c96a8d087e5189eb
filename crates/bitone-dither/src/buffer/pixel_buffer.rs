//! Owned RGB pixel buffer with bounds-checked 2D access.

use super::error::BufferError;
use crate::color::Rgb;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

fn byte_len(width: usize, height: usize) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BufferError::TooLarge { width, height })
}

/// An 8-bit, 3-channel, row-major image.
///
/// The byte layout is `[R, G, B, R, G, B, ...]` with a row stride of
/// `width * 3`. Construction guarantees `width >= 1`, `height >= 1` and
/// `data.len() == width * height * 3`, so every `(x, y)` inside the
/// dimensions maps to a valid pixel.
///
/// # Example
///
/// ```
/// use bitone_dither::{PixelBuffer, Rgb};
///
/// let mut image = PixelBuffer::filled(3, 2, Rgb::BLACK).unwrap();
/// image.set_pixel(2, 1, Rgb::WHITE);
///
/// assert_eq!(image.pixel(2, 1), Rgb::WHITE);
/// assert_eq!(image.get(3, 0), None);
/// assert_eq!(&image.as_bytes()[15..18], &[255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Create a black image of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self, BufferError> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create an image with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, BufferError> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&color.to_bytes());
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap raw interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroDimension`] if either dimension is zero
    /// - [`BufferError::TooLarge`] if the byte length overflows
    /// - [`BufferError::LengthMismatch`] if `data.len() != width * height * 3`
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build an image from a row-major list of pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: &[Rgb]) -> Result<Self, BufferError> {
        let data = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        Self::from_raw(width, height, data)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    /// The interleaved RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        (y * self.width + x) * CHANNELS
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let o = self.offset(x, y);
        Rgb::new(self.data[o], self.data[o + 1], self.data[o + 2])
    }

    /// Read the pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        let o = self.offset(x, y);
        self.data[o..o + CHANNELS].copy_from_slice(&color.to_bytes());
    }

    /// Read one channel (0 = R, 1 = G, 2 = B) of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image or `channel >= 3`.
    #[inline]
    pub fn channel(&self, x: usize, y: usize, channel: usize) -> u8 {
        assert!(channel < CHANNELS, "channel {} out of range", channel);
        self.data[self.offset(x, y) + channel]
    }

    /// Iterate over all pixels in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }
}
