/**
 * Shapegen CLI - Command-line interface for shape image batch generation
 */

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use shapegen::{BatchConfig, BatchGenerator};

/// Generate images with random colours, shapes, and optional distortion
#[derive(Parser)]
#[command(name = "shapegen")]
#[command(version = "0.1.0")]
#[command(about = "Generate images with different colors, shapes, and distortion", long_about = None)]
struct Cli {
    /// Number of pictures to generate
    #[arg(short = 'n', long, default_value = "10")]
    num_pictures: u32,

    /// Dimensions of the images (width height)
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [300, 300])]
    dimensions: Vec<u32>,

    /// Output directory to save images
    #[arg(short, long, default_value = "data/img")]
    output_dir: PathBuf,

    /// Size of the shapes
    #[arg(short, long, default_value = "100")]
    shape_size: u32,

    /// Enable distortion in the images
    #[arg(long)]
    distort: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u32>,

    /// Show a progress bar while generating
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (width, height) = (cli.dimensions[0], cli.dimensions[1]);

    // Validate inputs
    if width == 0 || height == 0 {
        anyhow::bail!("Dimensions must be positive");
    }
    if cli.shape_size == 0 {
        anyhow::bail!("Shape size must be positive");
    }
    if cli.shape_size > width.min(height) {
        anyhow::bail!(
            "Shape size {} does not fit within a {}×{} canvas",
            cli.shape_size,
            width,
            height
        );
    }

    if !cli.verbose {
        println!("Generating {} shape image(s)", cli.num_pictures);
        println!("Dimensions: {}×{}", width, height);
        println!("Shape size: {}", cli.shape_size);
        if cli.distort {
            println!("Distortion: Gaussian blur");
        }
        if let Some(s) = cli.seed {
            println!("Seed: {}", s);
        }
        println!("Output: {}", cli.output_dir.display());
        println!();
    }

    let config = BatchConfig {
        count: cli.num_pictures,
        width,
        height,
        output_dir: cli.output_dir,
        shape_size: cli.shape_size,
        distort: cli.distort,
        seed: cli.seed,
        verbose: cli.verbose,
    };

    let generator = BatchGenerator::new(config).context("Invalid configuration")?;
    generator.generate().context("Failed to generate images")?;

    Ok(())
}
