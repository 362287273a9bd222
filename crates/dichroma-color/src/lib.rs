//! # dichroma-color
//!
//! Simulates dichromatic color vision: given a display color, computes the
//! color a dichromat (by default a protanope) perceives.
//!
//! # Method
//!
//! ```text
//!   display RGB
//!        |  sRGB EOTF + D50 matrix
//!        v
//!      xyY ----- confusion line through the copunctal point
//!        |
//!        v
//!   intersection with the vision curve (parabola through two
//!   spectral anchors and white), luminance kept
//!        |
//!        v
//!   gamut correction along the confusion line
//!        |  D50 matrix inverse + sRGB OETF, round, clamp
//!        v
//!   display RGB
//! ```
//!
//! Based on Hu, Ward and Kurtz, "A Simple Method to Simulate Dichromat
//! Color Vision" (GRAPP 2006).
//!
//! # Modules
//!
//! - [`space`] - RGB <-> XYZ <-> xyY and the [`reference()`](space::reference) chromaticities
//! - [`curve`] - [`VisionCurve`]
//! - [`confusion`] - [`ConfusionLineSolver`]
//! - [`gamut`] - [`GamutTriangle`], [`to_display`](gamut::to_display)
//! - [`profile`] - [`Dichromacy`] parameters and YAML profiles
//!
//! # Quick Start
//!
//! ```rust
//! use dichroma_color::simulate_protanopia;
//! use dichroma_core::Rgb;
//!
//! let seen = simulate_protanopia(Rgb::new(255.0, 0.0, 0.0)).unwrap();
//! assert_eq!(seen, Rgb::new(142.0, 131.0, 12.0));
//! ```
//!
//! # Dependencies
//!
//! - [`dichroma-core`] - Color value types
//! - [`dichroma-math`] - Quadratics and lines
//! - [`dichroma-transfer`] - sRGB transfer function
//! - [`dichroma-primaries`] - Matrices, spectral anchors, copunctal points
//! - [`serde`], [`serde_yaml`] - Profile files
//!
//! # Used By
//!
//! - `dichroma-ops` - Whole-buffer simulation
//! - `dichroma-cli` - Command line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod simulate;
pub mod confusion;
pub mod curve;
pub mod gamut;
pub mod profile;
pub mod space;

pub use confusion::{ConfusionLineSolver, Solution};
pub use curve::VisionCurve;
pub use error::{SimError, SimResult};
pub use gamut::{DisplayRgb, GamutTriangle};
pub use profile::Dichromacy;
pub use simulate::{Simulation, Simulator, simulate_protanopia};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Dichromacy, SimError, SimResult, Simulation, Simulator, simulate_protanopia};
    pub use dichroma_core::{Rgb, Xyy, Xyz};
}
