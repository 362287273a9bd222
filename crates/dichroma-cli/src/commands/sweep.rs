//! Sweep command: simulate a regular sample of the RGB cube

use crate::SweepArgs;
use anyhow::Result;
use dichroma_color::Simulator;
use dichroma_core::{Rgba8, RgbaImage};
use dichroma_ops::{PipelineOptions, parallel};

use super::{already_scored, write_score};

/// Lays the cube out as `n*n` columns by `n` rows, one blue level per row.
pub fn cube_image(step: u8) -> RgbaImage {
    let levels: Vec<u8> = (0..=255u8).step_by(step.max(1) as usize).collect();
    let n = levels.len() as u32;
    let mut img = RgbaImage::new(n * n, n);
    for (row, &b) in levels.iter().enumerate() {
        for (i, &r) in levels.iter().enumerate() {
            for (j, &g) in levels.iter().enumerate() {
                let col = (i as u32) * n + j as u32;
                img.set_pixel(row as u32, col, Rgba8::new(r, g, b, 255));
            }
        }
    }
    img
}

pub fn run(args: SweepArgs, simulator: &Simulator, verbose: u8) -> Result<()> {
    if let Some(path) = &args.score_file {
        if already_scored(path) {
            if verbose > 0 {
                println!("Skipping sweep: {} exists", path.display());
            }
            return Ok(());
        }
    }

    let img = cube_image(args.step);
    let (_, report) = parallel::simulate_image(&img, simulator, PipelineOptions::default())?;
    let rmsd = report.rmsd.unwrap_or_default();

    println!("Profile:     {}", simulator.dichromacy().name);
    println!("Pixels:      {}", report.pixels);
    println!("Reprojected: {}", report.reprojected);
    println!("Clamped:     {}", report.clamped);
    println!("RMSD:        {rmsd:.6}");

    if let Some(path) = &args.score_file {
        write_score(path, rmsd, &args.label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_layout() {
        let img = cube_image(85);
        // 0, 85, 170, 255
        assert_eq!((img.width(), img.height()), (16, 4));
        assert_eq!(img.pixel(0, 0), Rgba8::new(0, 0, 0, 255));
        assert_eq!(img.pixel(3, 15), Rgba8::new(255, 255, 255, 255));
        assert_eq!(img.pixel(1, 4 + 2), Rgba8::new(85, 170, 85, 255));
    }

    #[test]
    fn test_coarsest_step() {
        let img = cube_image(255);
        assert_eq!((img.width(), img.height()), (4, 2));
    }
}
