//! # dichroma-core
//!
//! Core types shared by every dichroma crate.
//!
//! - [`Rgb`], [`Xyz`], [`Xyy`] - color values in the three spaces the
//!   simulation moves between
//! - [`Rgba8`] - a single 8-bit RGBA pixel
//! - [`PixelSource`], [`PixelSink`] - read/write access to a 2-D pixel buffer
//! - [`RgbaImage`] - owned row-major buffer implementing both
//!
//! ## Crate Structure
//!
//! ```text
//! dichroma-core (this crate)
//!    ^
//!    |
//!    +-- dichroma-transfer (sRGB transfer function)
//!    +-- dichroma-primaries (primaries, white points, copunctal points)
//!    +-- dichroma-color (the simulation engine)
//!    +-- dichroma-ops (whole-buffer pipeline)
//! ```
//!
//! This crate has no internal dependencies and performs no I/O. Decoding
//! images into an [`RgbaImage`] (or any [`PixelSource`]) is left to the
//! caller.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod image;
pub mod pixel;

pub use color::{Rgb, Xyy, Xyz};
pub use error::{Error, Result};
pub use image::{PixelSink, PixelSource, RgbaImage};
pub use pixel::Rgba8;

/// Prelude module for convenient imports.
///
/// ```
/// use dichroma_core::prelude::*;
///
/// let px = Rgba8::new(10, 20, 30, 255);
/// assert_eq!(px.rgb(), Rgb::new(10.0, 20.0, 30.0));
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, Xyy, Xyz};
    pub use crate::error::{Error, Result};
    pub use crate::image::{PixelSink, PixelSource, RgbaImage};
    pub use crate::pixel::Rgba8;
}
