//! Test images written to the scratch directory.

use std::path::Path;

/// Save a `width` x `height` RGB image filled with `color`.
pub fn solid(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    image::RgbImage::from_pixel(width, height, image::Rgb(color))
        .save(path)
        .expect("Failed to write solid fixture");
}

/// Save an RGB image with a red ramp across and a green ramp down.
pub fn gradient(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / (width - 1).max(1)) as u8,
            (y * 255 / (height - 1).max(1)) as u8,
            ((x + y) * 7 % 256) as u8,
        ])
    })
    .save(path)
    .expect("Failed to write gradient fixture");
}

/// Save an 8-bit grayscale image with a horizontal ramp.
pub fn gray_ramp(path: &Path, width: u32, height: u32) {
    image::GrayImage::from_fn(width, height, |x, _| {
        image::Luma([(x * 255 / (width - 1).max(1)) as u8])
    })
    .save(path)
    .expect("Failed to write grayscale fixture");
}

/// Write bytes that no decoder accepts under a `.png` name.
pub fn corrupt(path: &Path) {
    std::fs::write(path, b"\x89PNG but then nothing useful").expect("Failed to write corrupt file");
}
