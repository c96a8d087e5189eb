use std::path::Path;

use bitone_dither::{DiffusionStats, DitherOptions, Ditherer, Palette};
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::rendering::codec;

/// Decode -> diffuse -> encode, one image per call.
pub struct DitherPipeline {
    ditherer: Ditherer,
}

impl DitherPipeline {
    pub fn new(palette: Palette, options: DitherOptions) -> Self {
        Self {
            ditherer: Ditherer::new(palette).options(options),
        }
    }

    pub fn ditherer(&self) -> &Ditherer {
        &self.ditherer
    }

    /// Dither the image at `input` and write it to `output` as an RGB PNG.
    ///
    /// Nothing is written if decoding fails.
    pub fn run(&self, input: &Path, output: &Path) -> Result<DiffusionStats, PipelineError> {
        info!(input = %input.display(), "Decoding input");
        let mut image = codec::decode_rgb(input).map_err(|source| PipelineError::Decode {
            path: input.to_path_buf(),
            source,
        })?;
        debug!(
            width = image.width(),
            height = image.height(),
            palette = %self.ditherer.palette(),
            rounding = ?self.ditherer.dither_options().rounding,
            edges = ?self.ditherer.dither_options().edge_strategy,
            "Dithering"
        );

        let stats = self.ditherer.dither(&mut image);
        debug!(
            pixels = stats.pixels,
            dropped_r = stats.dropped_error[0],
            dropped_g = stats.dropped_error[1],
            dropped_b = stats.dropped_error[2],
            "Diffusion complete"
        );

        let bytes = codec::write_png(&image, output).map_err(|source| PipelineError::Encode {
            path: output.to_path_buf(),
            source,
        })?;
        info!(output = %output.display(), bytes, "Wrote PNG");

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, EncodeError};
    use bitone_dither::Rgb;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, value: u8) -> std::path::PathBuf {
        let path = dir.path().join(name);
        image::RgbImage::from_pixel(4, 4, image::Rgb([value; 3]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_run_writes_two_color_png() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.png", 128);
        let output = dir.path().join("out.png");

        let pipeline = DitherPipeline::new(Palette::black_and_white(), DitherOptions::new());
        let stats = pipeline.run(&input, &output).unwrap();
        assert_eq!(stats.pixels, 16);

        let result = codec::decode_rgb(&output).unwrap();
        assert_eq!((result.width(), result.height()), (4, 4));
        assert!(result.pixels().all(|p| p == Rgb::BLACK || p == Rgb::WHITE));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");

        let pipeline = DitherPipeline::new(Palette::default(), DitherOptions::new());
        let err = pipeline
            .run(&dir.path().join("missing.png"), &output)
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Decode {
                source: DecodeError::Image(_),
                ..
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.png", 200);
        let output = dir.path().join("missing-dir").join("out.png");

        let pipeline = DitherPipeline::new(Palette::default(), DitherOptions::new());
        let err = pipeline.run(&input, &output).unwrap_err();

        match err {
            PipelineError::Encode { path, source } => {
                assert_eq!(path, output);
                assert!(matches!(source, EncodeError::Io(_)));
            }
            other => panic!("Expected Encode error, got {other:?}"),
        }
    }
}
