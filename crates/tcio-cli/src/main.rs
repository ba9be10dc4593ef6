//! lutapply - apply an SPI 3D LUT to a PNG image.
//!
//! Loads a PNG, runs every pixel through a trilinearly interpolated 3D
//! LUT, gamma-encodes the result for display and writes it back out.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tcio_lut::LutFilter;

mod image;

#[derive(Parser)]
#[command(name = "lutapply")]
#[command(author, version, about = "Apply an SPI 3D LUT to a PNG image")]
#[command(long_about = "
Applies a .spi3d color LUT to an image via trilinear interpolation.

Examples:
  lutapply input.png grade.spi3d output.png
  lutapply input.png grade.spi3d output.png --gamma 2.4
  lutapply input.png grade.spi3d output.png --heatmap
")]
struct Cli {
    /// Input PNG image
    input: PathBuf,

    /// SPI3D LUT file
    lut: PathBuf,

    /// Output PNG image
    output: PathBuf,

    /// Display gamma applied when encoding the output
    #[arg(long, default_value = "2.2")]
    gamma: f32,

    /// Render the log-luminance heatmap instead of applying the LUT
    #[arg(long)]
    heatmap: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let src = image::load_png(&cli.input)?;
    debug!(
        width = src.width,
        height = src.height,
        "loaded {}",
        cli.input.display()
    );

    let dst = if cli.heatmap {
        run_heatmap(&src)
    } else {
        let filter = LutFilter::load(&cli.lut)
            .with_context(|| format!("Failed to load SPI 3D lut: {}", cli.lut.display()))?;
        if !filter.is_valid() {
            bail!("LUT holds no data: {}", cli.lut.display());
        }
        info!(dim = ?filter.dim(), "applying LUT {}", cli.lut.display());
        run_filter(&filter, &src)
    };

    image::save_png(&cli.output, &dst, cli.gamma)?;

    if cli.verbose {
        println!(
            "Wrote {} ({}x{})",
            cli.output.display(),
            dst.width,
            dst.height
        );
    }

    Ok(())
}

fn run_filter(filter: &LutFilter, src: &image::Image) -> image::Image {
    let mut rgb = vec![0.0f32; src.rgb.len()];
    for (out, px) in rgb.chunks_mut(3).zip(src.rgb.chunks(3)) {
        out.copy_from_slice(&filter.apply(px[0], px[1], px[2]));
    }
    image::Image {
        width: src.width,
        height: src.height,
        rgb,
    }
}

fn run_heatmap(src: &image::Image) -> image::Image {
    let mut rgb = vec![0.0f32; src.rgb.len()];
    for (out, px) in rgb.chunks_mut(3).zip(src.rgb.chunks(3)) {
        out.copy_from_slice(&LutFilter::heatmap(px[0], px[1], px[2]));
    }
    image::Image {
        width: src.width,
        height: src.height,
        rgb,
    }
}
