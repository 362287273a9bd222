//! # dichroma-math
//!
//! Math primitives for the dichromacy simulation engine.
//!
//! - [`Mat3`] - 3x3 matrices for RGB <-> XYZ transforms
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - Chromatic adaptation ([`adapt_matrix`], [`BRADFORD`])
//! - [`Quadratic`] - `y = a*x^2 + b*x + c`, built by Lagrange interpolation
//! - [`Line`] - `y = slope*x + intercept` through two chromaticities
//!
//! # Design
//!
//! Everything is `f64`. The simulation rounds its final RGB channels to
//! integers, so the intermediate math keeps full double precision to avoid
//! flipping a rounding decision.
//!
//! Matrices are stored **row-major** and use **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use dichroma_math::{Line, Quadratic};
//!
//! // Parabola through three points
//! let q = Quadratic::lagrange((0.0, 0.0), (1.0, 1.0), (2.0, 4.0)).unwrap();
//! assert!((q.a - 1.0).abs() < 1e-12);
//!
//! // Line through two points, ordered by x internally
//! let line = Line::through((1.0, 3.0), (0.0, 1.0)).unwrap();
//! assert_eq!(line.at(2.0), 5.0);
//! ```
//!
//! # Used By
//!
//! - `dichroma-primaries` - RGB/XYZ matrix generation
//! - `dichroma-color` - vision curve and confusion lines

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod line;
mod mat3;
mod quadratic;
mod vec3;

pub use adapt::*;
pub use line::*;
pub use mat3::*;
pub use quadratic::*;
pub use vec3::*;
