//! Image command: simulate a raw RGBA8 buffer and score it

use crate::ImageArgs;
use anyhow::{Context, Result};
use dichroma_color::Simulator;
use dichroma_core::RgbaImage;
use dichroma_ops::{PipelineOptions, parallel, simulate_image};
use tracing::{debug, info};

use super::{already_scored, sibling_path, write_score};

pub fn run(args: ImageArgs, simulator: &Simulator, verbose: u8) -> Result<()> {
    let score_file = args
        .score_file
        .clone()
        .unwrap_or_else(|| sibling_path(&args.input, "-proto.rmsd"));
    if already_scored(&score_file) {
        info!(path = %score_file.display(), "score exists, skipping");
        if verbose > 0 {
            println!("Skipping {}: {} exists", args.input.display(), score_file.display());
        }
        return Ok(());
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&args.input, "-proto.rgba"));

    let data = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;
    let img = RgbaImage::from_raw(args.width, args.height, data)
        .with_context(|| format!("Invalid raw image: {}", args.input.display()))?;
    debug!(width = args.width, height = args.height, "image loaded");

    let options = PipelineOptions::default();
    let (out, report) = if args.sequential {
        simulate_image(&img, simulator, options)?
    } else {
        parallel::simulate_image(&img, simulator, options)?
    };

    std::fs::write(&output, out.to_raw())
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    let rmsd = report.rmsd.unwrap_or_default();
    let label = args
        .input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    write_score(&score_file, rmsd, &label)?;

    println!("{} -> {}", args.input.display(), output.display());
    println!("RMSD: {rmsd:.6}");
    if verbose > 0 {
        println!(
            "Pixels: {}, reprojected: {}, clamped: {}",
            report.pixels, report.reprojected, report.clamped
        );
    }
    Ok(())
}
