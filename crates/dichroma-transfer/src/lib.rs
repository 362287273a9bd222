//! # dichroma-transfer
//!
//! Transfer functions between gamma-encoded display values and linear light.
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! Only [`srgb`] is needed: every color the simulation sees is an 8-bit
//! sRGB display value.
//!
//! # Usage
//!
//! ```rust
//! use dichroma_core::Rgb;
//! use dichroma_transfer::srgb;
//!
//! let linear = srgb::decode(Rgb::new(255.0, 128.0, 0.0));
//! assert!((linear[0] - 1.0).abs() < 1e-12);
//!
//! let back = srgb::encode(linear);
//! assert!((back.g - 128.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`dichroma-core`] - [`Rgb`](dichroma_core::Rgb)
//!
//! # Used By
//!
//! - `dichroma-color` - RGB <-> XYZ conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
