//! # dichroma-ops
//!
//! Runs the dichromacy simulation over whole pixel buffers.
//!
//! # Modules
//!
//! - [`pipeline`] - Sequential simulation over any [`PixelSource`](dichroma_core::PixelSource)
//!   / [`PixelSink`](dichroma_core::PixelSink) pair
//! - [`metric`] - RMSD between original and simulated colors
//! - [`parallel`] - Row-parallel variant (feature `parallel`, on by default)
//!
//! # Example
//!
//! ```rust
//! use dichroma_color::Simulator;
//! use dichroma_core::{Rgba8, RgbaImage};
//! use dichroma_ops::{PipelineOptions, simulate_image};
//!
//! let img = RgbaImage::filled(8, 8, Rgba8::new(255, 255, 255, 255));
//! let (out, report) = simulate_image(&img, Simulator::protanopia(), PipelineOptions::default()).unwrap();
//! assert_eq!(out, img);
//! assert_eq!(report.rmsd, Some(0.0));
//! ```
//!
//! # Dependencies
//!
//! - [`dichroma-core`] - Pixel buffers
//! - [`dichroma-color`] - The simulator
//! - [`rayon`] - Parallel rows (optional)
//!
//! # Used By
//!
//! - `dichroma-cli` - `image` and `sweep` commands
//! - `dichroma-bench` - Throughput benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod metric;
pub mod pipeline;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use metric::{RmsdAccumulator, pixel_distance, rmsd};
pub use pipeline::{PipelineOptions, PipelineReport, simulate_buffer, simulate_image, simulate_pixel};
