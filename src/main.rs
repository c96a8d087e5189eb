use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitone::error::PipelineError;
use bitone::services::DitherPipeline;
use bitone_dither::{DitherOptions, EdgeStrategy, Palette, Rounding};

#[derive(Parser)]
#[command(name = "bitone", version)]
#[command(about = "Dither an image to black and white with Floyd-Steinberg error diffusion")]
struct Cli {
    /// Input image (PNG, JPEG, BMP or GIF)
    input: PathBuf,

    /// Output PNG file path
    output: PathBuf,

    /// Output colors as comma-separated hex RGB (e.g. "#000000,#FFFFFF")
    #[arg(long, default_value = "#000000,#FFFFFF", value_parser = parse_palette)]
    palette: Palette,

    /// How error shares are rounded
    #[arg(long, value_enum, default_value_t = RoundingArg::Truncate)]
    rounding: RoundingArg,

    /// How error that falls outside the image is handled
    #[arg(long, value_enum, default_value_t = EdgesArg::RowBuffer)]
    edges: EdgesArg,

    /// Log stage details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundingArg {
    /// Divide and truncate toward zero
    Truncate,
    /// Round to nearest before dividing
    Nearest,
}

impl From<RoundingArg> for Rounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Truncate => Rounding::Truncate,
            RoundingArg::Nearest => Rounding::Nearest,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EdgesArg {
    /// Two-row error accumulator with bounds checks
    RowBuffer,
    /// Black-margined working frame, cropped afterwards
    Padded,
}

impl From<EdgesArg> for EdgeStrategy {
    fn from(arg: EdgesArg) -> Self {
        match arg {
            EdgesArg::RowBuffer => EdgeStrategy::RowBuffer,
            EdgesArg::Padded => EdgeStrategy::Padded,
        }
    }
}

fn parse_palette(s: &str) -> Result<Palette, String> {
    s.parse::<Palette>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(PipelineError::Usage(e.to_string().trim_end().to_string()).into()),
    };

    init_logging(cli.verbose);

    let options = DitherOptions::new()
        .rounding(cli.rounding.into())
        .edge_strategy(cli.edges.into());
    let pipeline = DitherPipeline::new(cli.palette, options);
    pipeline.run(&cli.input, &cli.output)?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "bitone=debug" } else { "bitone=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
