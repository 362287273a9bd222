//! Row-parallel simulation using Rayon.
//!
//! Rows are independent, so the output buffer is split into row chunks and
//! handed to the rayon pool. Results are identical to
//! [`pipeline::simulate_image`](crate::pipeline::simulate_image).
//!
//! # Example
//!
//! ```rust
//! use dichroma_color::Simulator;
//! use dichroma_core::{Rgba8, RgbaImage};
//! use dichroma_ops::{PipelineOptions, parallel};
//!
//! let img = RgbaImage::filled(64, 64, Rgba8::new(200, 100, 50, 255));
//! let (out, report) = parallel::simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
//! assert_eq!(report.pixels, 64 * 64);
//! assert_eq!(out.pixel(63, 63), Rgba8::new(140, 130, 58, 255));
//! ```

use dichroma_color::Simulator;
use dichroma_core::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::OpsResult;
use crate::pipeline::{PipelineOptions, PipelineReport, Tally, simulate_pixel};

/// Parallel version of [`pipeline::simulate_image`](crate::pipeline::simulate_image).
///
/// # Errors
///
/// [`OpsError::Simulation`](crate::OpsError::Simulation) if any pixel fails.
pub fn simulate_image(
    img: &RgbaImage,
    simulator: &Simulator,
    options: PipelineOptions,
) -> OpsResult<(RgbaImage, PipelineReport)> {
    let (width, height) = (img.width(), img.height());
    let mut out = RgbaImage::new(width, height);
    if img.is_empty() {
        return Ok((out, Tally::default().into_report(options)));
    }
    debug!(width, height, threads = rayon::current_num_threads(), "Simulating buffer in parallel");

    let row_len = width as usize;
    let tally = out
        .as_mut_slice()
        .par_chunks_mut(row_len)
        .zip(img.as_slice().par_chunks(row_len))
        .map(|(dst_row, src_row)| -> OpsResult<Tally> {
            let mut tally = Tally::default();
            for (dst, src) in dst_row.iter_mut().zip(src_row) {
                let (px, sim) = simulate_pixel(simulator, *src)?;
                *dst = px;
                tally.record(&sim, options);
            }
            Ok(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

    Ok((out, tally.into_report(options)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline;
    use dichroma_core::Rgba8;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for row in 0..height {
            for col in 0..width {
                let px = Rgba8::new((col * 7 % 256) as u8, (row * 13 % 256) as u8, ((row + col) % 256) as u8, 200);
                img.set_pixel(row, col, px);
            }
        }
        img
    }

    #[test]
    fn test_matches_sequential() {
        let img = gradient(37, 29);
        let options = PipelineOptions::default();
        let (seq, seq_report) = pipeline::simulate_image(&img, Simulator::protanopia(), options).unwrap();
        let (par, par_report) = simulate_image(&img, Simulator::protanopia(), options).unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq_report.pixels, par_report.pixels);
        assert_eq!(seq_report.reprojected, par_report.reprojected);
        assert_eq!(seq_report.clamped, par_report.clamped);
        let (a, b) = (seq_report.rmsd.unwrap(), par_report.rmsd.unwrap());
        assert!((a - b).abs() < 1e-12, "{a} vs {b}");
    }

    #[test]
    fn test_empty() {
        let (out, report) = simulate_image(&RgbaImage::new(0, 4), Simulator::protanopia(), PipelineOptions::default()).unwrap();
        assert!(out.is_empty());
        assert_eq!(report.pixels, 0);
    }
}
