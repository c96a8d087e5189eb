//! Assertion helpers for tests.

use std::path::Path;

use image::GenericImageView;
use pretty_assertions::assert_eq;

use super::app::CliOutput;

/// Assert the binary exited 0.
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success(),
        "Expected exit 0, got {:?}. Stderr: {}",
        output.code,
        output.stderr
    );
}

/// Assert the binary exited 1 and explained itself on stderr.
pub fn assert_failure(output: &CliOutput) {
    assert_eq!(
        output.code,
        Some(1),
        "Expected exit 1. Stderr: {}",
        output.stderr
    );
    assert!(
        !output.stderr.trim().is_empty(),
        "Expected an error message on stderr"
    );
}

/// Load `path` and assert it is an 8-bit RGB PNG of the given size.
pub fn assert_rgb_png(path: &Path, width: u32, height: u32) -> image::RgbImage {
    let bytes = std::fs::read(path).expect("Output file missing");
    assert_eq!(
        image::guess_format(&bytes).ok(),
        Some(image::ImageFormat::Png),
        "Output is not a PNG"
    );

    let decoded = image::load_from_memory(&bytes).expect("Output PNG does not decode");
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!((decoded.width(), decoded.height()), (width, height));
    decoded.into_rgb8()
}

/// Assert every pixel is one of `colors`.
pub fn assert_only_colors(image: &image::RgbImage, colors: &[[u8; 3]]) {
    for (x, y, p) in image.enumerate_pixels() {
        assert!(
            colors.contains(&p.0),
            "Pixel ({x}, {y}) is {:?}, expected one of {:?}",
            p.0,
            colors
        );
    }
}
