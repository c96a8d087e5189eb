//! Image file decoding and PNG encoding.

use std::io::Cursor;
use std::path::Path;

use bitone_dither::PixelBuffer;

use crate::error::{DecodeError, EncodeError};

/// Decode any supported image file into an 8-bit RGB buffer.
///
/// Alpha is dropped and grayscale is expanded to three channels.
pub fn decode_rgb(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let rgb = image::open(path)?.into_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelBuffer::from_raw(
        width as usize,
        height as usize,
        rgb.into_raw(),
    )?)
}

/// Encode an RGB buffer as an 8-bit RGB PNG.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let too_large = || EncodeError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_bytes())?;
        writer.finish()?;
    }
    Ok(buf.into_inner())
}

/// Encode `image` and write it to `path`. Returns the number of bytes written.
pub fn write_png(image: &PixelBuffer, path: &Path) -> Result<usize, EncodeError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}
