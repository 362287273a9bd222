//! Sequential whole-buffer simulation.
//!
//! Every pixel's color channels go through the [`Simulator`]; alpha is
//! copied. The first pixel that fails aborts the run and nothing is
//! written.
//!
//! # Example
//!
//! ```rust
//! use dichroma_color::Simulator;
//! use dichroma_core::{Rgba8, RgbaImage};
//! use dichroma_ops::{PipelineOptions, simulate_image};
//!
//! let img = RgbaImage::filled(4, 4, Rgba8::new(255, 0, 0, 128));
//! let (out, report) = simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
//! assert_eq!(out.pixel(0, 0), Rgba8::new(142, 131, 12, 128));
//! assert_eq!(report.pixels, 16);
//! ```

use dichroma_color::{Simulation, Simulator};
use dichroma_core::{PixelSink, PixelSource, Rgba8, RgbaImage};
use tracing::{debug, trace};

use crate::metric::RmsdAccumulator;
use crate::{OpsError, OpsResult};

/// Knobs for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Accumulate the RMSD between input and output
    pub compute_rmsd: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { compute_rmsd: true }
    }
}

/// Counters from one run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineReport {
    /// Pixels processed
    pub pixels: usize,
    /// Pixels moved back onto the gamut triangle
    pub reprojected: usize,
    /// Pixels with at least one clamped channel
    pub clamped: usize,
    /// RMSD between input and output, if requested
    pub rmsd: Option<f64>,
}

/// Per-chunk tally that can be merged across threads.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Tally {
    pixels: usize,
    reprojected: usize,
    clamped: usize,
    rmsd: RmsdAccumulator,
}

impl Tally {
    #[inline]
    pub(crate) fn record(&mut self, sim: &Simulation, options: PipelineOptions) {
        self.pixels += 1;
        self.reprojected += usize::from(sim.reprojected);
        self.clamped += usize::from(sim.clamped);
        if options.compute_rmsd {
            self.rmsd.push_pair(sim.input, sim.output);
        }
    }

    pub(crate) fn merge(mut self, other: Self) -> Self {
        self.pixels += other.pixels;
        self.reprojected += other.reprojected;
        self.clamped += other.clamped;
        self.rmsd.merge(&other.rmsd);
        self
    }

    pub(crate) fn into_report(self, options: PipelineOptions) -> PipelineReport {
        trace!(reprojected = self.reprojected, clamped = self.clamped, "pipeline tally");
        PipelineReport {
            pixels: self.pixels,
            reprojected: self.reprojected,
            clamped: self.clamped,
            rmsd: options.compute_rmsd.then(|| self.rmsd.finish()),
        }
    }
}

/// Simulates one pixel, keeping its alpha.
#[inline]
pub fn simulate_pixel(simulator: &Simulator, px: Rgba8) -> OpsResult<(Rgba8, Simulation)> {
    let sim = simulator.simulate_detailed(px.rgb())?;
    Ok((Rgba8::from_rgb(sim.output, px.a), sim))
}

/// Simulates every pixel of `src` into `dst`.
///
/// # Errors
///
/// - [`OpsError::DimensionMismatch`] if the buffers differ in size
/// - [`OpsError::Simulation`] for the first pixel that fails
///
/// Results are staged and only written to `dst` once every pixel has
/// succeeded; on error `dst` is left untouched.
pub fn simulate_buffer<S, D>(
    src: &S,
    dst: &mut D,
    simulator: &Simulator,
    options: PipelineOptions,
) -> OpsResult<PipelineReport>
where
    S: PixelSource + ?Sized,
    D: PixelSink + ?Sized,
{
    let (width, height) = PixelSource::dimensions(src);
    if (width, height) != PixelSink::dimensions(dst) {
        return Err(OpsError::DimensionMismatch {
            src: (width, height),
            dst: PixelSink::dimensions(dst),
        });
    }
    debug!(width, height, profile = %simulator.dichromacy().name, "Simulating buffer");

    let mut tally = Tally::default();
    let mut staged = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        for col in 0..width {
            let (out, sim) = simulate_pixel(simulator, src.get(row, col))?;
            staged.push(out);
            tally.record(&sim, options);
        }
    }
    let coords = (0..height).flat_map(|row| (0..width).map(move |col| (row, col)));
    for ((row, col), px) in coords.zip(staged) {
        dst.set(row, col, px);
    }
    Ok(tally.into_report(options))
}

/// Simulates an owned buffer into a new one.
pub fn simulate_image(
    img: &RgbaImage,
    simulator: &Simulator,
    options: PipelineOptions,
) -> OpsResult<(RgbaImage, PipelineReport)> {
    let mut out = RgbaImage::new(img.width(), img.height());
    let report = simulate_buffer(img, &mut out, simulator, options)?;
    Ok((out, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_preserved() {
        let mut img = RgbaImage::new(3, 1);
        img.set_pixel(0, 0, Rgba8::new(255, 0, 0, 0));
        img.set_pixel(0, 1, Rgba8::new(0, 255, 0, 77));
        img.set_pixel(0, 2, Rgba8::new(0, 0, 255, 255));
        let (out, _) = simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
        let alphas: Vec<u8> = out.as_slice().iter().map(|p| p.a).collect();
        assert_eq!(alphas, vec![0, 77, 255]);
    }

    #[test]
    fn test_report_counts() {
        let img = RgbaImage::filled(2, 2, Rgba8::new(0, 0, 17, 255));
        let (_, report) = simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
        assert_eq!(report.pixels, 4);
        assert_eq!(report.reprojected, 4);
        assert!(report.rmsd.unwrap() >= 0.0);
    }

    #[test]
    fn test_rmsd_optional() {
        let img = RgbaImage::filled(2, 2, Rgba8::new(9, 9, 9, 255));
        let options = PipelineOptions { compute_rmsd: false };
        let (_, report) = simulate_image(&img, Simulator::protanopia(), options).unwrap();
        assert_eq!(report.rmsd, None);
    }

    #[test]
    fn test_gray_image_rmsd_zero() {
        let img = RgbaImage::filled(5, 5, Rgba8::new(128, 128, 128, 255));
        let (out, report) = simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
        assert_eq!(out, img);
        assert_eq!(report.rmsd, Some(0.0));
    }

    #[test]
    fn test_dimension_mismatch() {
        let src = RgbaImage::new(2, 2);
        let mut dst = RgbaImage::new(3, 2);
        let err = simulate_buffer(&src, &mut dst, Simulator::protanopia(), PipelineOptions::default()).unwrap_err();
        assert!(matches!(err, OpsError::DimensionMismatch { src: (2, 2), dst: (3, 2) }));
    }

    #[test]
    fn test_empty_image() {
        let img = RgbaImage::new(0, 0);
        let (out, report) = simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
        assert!(out.is_empty());
        assert_eq!(report.pixels, 0);
        assert_eq!(report.rmsd, Some(0.0));
    }

    #[test]
    fn test_failed_run_leaves_dst_untouched() {
        use dichroma_color::Dichromacy;
        use std::borrow::Cow;

        // A curve peaking sharply at white: saturated confusion lines miss it.
        let narrow = Simulator::new(Dichromacy {
            name: Cow::Borrowed("narrow"),
            anchors: [(0.30, -5.0), (0.40, -5.0)],
            ..Dichromacy::PROTANOPIA
        })
        .unwrap();
        let mut src = RgbaImage::filled(3, 2, Rgba8::new(128, 128, 128, 255));
        src.set_pixel(1, 1, Rgba8::new(0, 255, 0, 255));
        let sentinel = Rgba8::new(1, 2, 3, 4);
        let mut dst = RgbaImage::filled(3, 2, sentinel);

        let err = simulate_buffer(&src, &mut dst, &narrow, PipelineOptions::default()).unwrap_err();
        assert!(matches!(err, OpsError::Simulation(_)), "{err:?}");
        assert!(dst.as_slice().iter().all(|&p| p == sentinel));
    }
}
