//! Points on the CIE 1931 spectral locus.
//!
//! Values are xyY from the CIE 15 tables for the 2 degree observer. A
//! dichromat's vision curve passes through two of them.

/// A spectral locus sample in xyY.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocusPoint {
    /// Wavelength in nanometres
    pub wavelength: f64,
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
    /// Relative luminance
    pub luminance: f64,
}

impl LocusPoint {
    /// The `(x, y)` chromaticity.
    #[inline]
    pub const fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// 470 nm (blue).
pub const LOCUS_470: LocusPoint = LocusPoint {
    wavelength: 470.0,
    x: 0.12412,
    y: 0.05780,
    luminance: 0.090980,
};

/// 575 nm (yellow).
pub const LOCUS_575: LocusPoint = LocusPoint {
    wavelength: 575.0,
    x: 0.47877,
    y: 0.52020,
    luminance: 0.915400,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locus_ordering() {
        assert!(LOCUS_470.x < LOCUS_575.x);
        assert!(LOCUS_470.luminance < LOCUS_575.luminance);
        assert_eq!(LOCUS_575.xy(), (0.47877, 0.52020));
    }
}
