//! Padded-frame border strategy.
//!
//! The image is copied into a signed working frame surrounded by a black
//! margin as wide as the kernel's reach. Error shares are added straight
//! into the frame, so a cell holds "stored value + pending error". Only
//! interior cells are ever quantized; whatever lands in the margin is
//! discarded when the interior is cropped back into the image.

use super::{DiffusionStats, Kernel, Rounding};
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::Palette;

struct PaddedFrame {
    cells: Vec<[i32; 3]>,
    stride: usize,
    margin: usize,
}

impl PaddedFrame {
    fn from_image(image: &PixelBuffer, margin: usize) -> Self {
        let stride = image.width() + 2 * margin;
        let rows = image.height() + 2 * margin;
        let mut cells = vec![Rgb::BLACK.to_i32(); stride * rows];
        for y in 0..image.height() {
            for x in 0..image.width() {
                cells[(y + margin) * stride + x + margin] = image.pixel(x, y).to_i32();
            }
        }
        Self {
            cells,
            stride,
            margin,
        }
    }

    /// Index of image coordinate `(x, y)` shifted by `(dx, dy)`.
    #[inline]
    fn index(&self, x: usize, y: usize, dx: i32, dy: i32) -> usize {
        let fx = (x + self.margin) as isize + dx as isize;
        let fy = (y + self.margin) as isize + dy as isize;
        fy as usize * self.stride + fx as usize
    }
}

pub(super) fn dither_padded(
    image: &mut PixelBuffer,
    palette: &Palette,
    kernel: &Kernel,
    rounding: Rounding,
) -> DiffusionStats {
    let width = image.width();
    let height = image.height();
    let mut stats = DiffusionStats {
        pixels: image.pixel_count(),
        ..Default::default()
    };

    let mut frame = PaddedFrame::from_image(image, kernel.reach());

    for y in 0..height {
        for x in 0..width {
            let idx = frame.index(x, y, 0, 0);
            let pixel = Rgb::clamped(frame.cells[idx]);

            let quantized = palette.nearest(pixel);
            frame.cells[idx] = quantized.to_i32();

            let error = pixel.error_from(quantized);
            if error == [0; 3] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let share = rounding.scale_rgb(error, weight, kernel.divisor);
                let target = frame.index(x, y, dx, dy);
                let cell = &mut frame.cells[target];
                for c in 0..3 {
                    cell[c] += share[c];
                }

                let nx = x as isize + dx as isize;
                let ny = y as isize + dy as isize;
                let inside = nx >= 0 && (nx as usize) < width && (ny as usize) < height;
                if !inside {
                    stats.record_dropped(share);
                }
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            image.set_pixel(x, y, Rgb::clamped(frame.cells[frame.index(x, y, 0, 0)]));
        }
    }

    stats
}
