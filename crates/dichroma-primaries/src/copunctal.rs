//! Copunctal points.
//!
//! All confusion lines of a dichromat meet in one chromaticity, the
//! copunctal point. Colors on the same line look identical to that observer.

/// Protanopia (missing L cones).
pub const PROTAN: (f64, f64) = (0.747, 0.253);
