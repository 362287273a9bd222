//! # dichroma-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation, plus the
//! fixed chromaticities a dichromacy model is built from.
//!
//! # Contents
//!
//! | Item | Meaning |
//! |------|---------|
//! | [`SRGB`] | sRGB / Rec.709 primaries, D65 white |
//! | [`SRGB_TO_XYZ_D50`], [`XYZ_D50_TO_SRGB`] | Bradford-adapted sRGB matrices |
//! | [`spectral`] | xyY points on the spectral locus (470 nm, 575 nm) |
//! | [`copunctal`] | Copunctal points of the dichromacies |
//!
//! The simulation works in a D50-adapted XYZ. Every chromaticity it needs
//! for the display gamut (white, red, green, blue) can be read back from
//! the matrix itself with [`Primaries::from_matrix`], so the conversions and
//! the gamut triangle never disagree.
//!
//! # Usage
//!
//! ```rust
//! use dichroma_primaries::{Primaries, SRGB_TO_XYZ_D50, D50_XY};
//!
//! let p = Primaries::from_matrix(&SRGB_TO_XYZ_D50, "sRGB (D50)");
//! assert!((p.w.0 - D50_XY.0).abs() < 1e-4);
//! assert!((p.r.0 - 0.648).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`dichroma-math`] - Matrix operations and Bradford adaptation
//!
//! # Used By
//!
//! - `dichroma-color` - Color space conversions and the vision curve

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod copunctal;
pub mod spectral;

use dichroma_math::{BRADFORD, Mat3, Vec3, adapt_matrix};

/// An RGB gamut: three primaries and a white, as CIE xy chromaticities.
///
/// ```rust
/// use dichroma_primaries::{Primaries, D65_XY, rgb_to_xyz_matrix};
///
/// let rec709 = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: D65_XY,
///     name: "Rec.709",
/// };
/// assert_eq!(rgb_to_xyz_matrix(&rec709), rgb_to_xyz_matrix(&dichroma_primaries::SRGB));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red `(x, y)`
    pub r: (f64, f64),
    /// Green `(x, y)`
    pub g: (f64, f64),
    /// Blue `(x, y)`
    pub b: (f64, f64),
    /// White `(x, y)`
    pub w: (f64, f64),
    /// Display name
    pub name: &'static str,
}

impl Primaries {
    /// The white as XYZ with unit luminance.
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        unit_luminance_xyz(self.w)
    }

    /// Reads primaries and white point back out of an RGB to XYZ matrix.
    ///
    /// Each column is the XYZ of a unit primary; the white point is the
    /// image of `(1, 1, 1)`.
    pub fn from_matrix(rgb_to_xyz: &Mat3, name: &'static str) -> Self {
        Self {
            r: chromaticity(rgb_to_xyz.col(0)),
            g: chromaticity(rgb_to_xyz.col(1)),
            b: chromaticity(rgb_to_xyz.col(2)),
            w: chromaticity(*rgb_to_xyz * Vec3::ONE),
            name,
        }
    }
}

/// CIE D65, `(x, y)`.
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// CIE D50, `(x, y)`.
pub const D50_XY: (f64, f64) = (0.34567, 0.35850);

/// IEC 61966-2-1 sRGB, which shares its primaries with Rec.709.
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// XYZ of chromaticity `xy` scaled to `Y = 1`; zero for a degenerate `y`.
fn unit_luminance_xyz((x, y): (f64, f64)) -> Vec3 {
    if y.abs() < 1e-10 {
        return Vec3::ZERO;
    }
    Vec3::new(x, y, 1.0 - x - y) * (1.0 / y)
}

/// xy chromaticity of an XYZ triplet; `(0, 0)` for a zero sum.
pub fn chromaticity(xyz: Vec3) -> (f64, f64) {
    let sum = xyz.sum();
    if sum == 0.0 {
        (0.0, 0.0)
    } else {
        (xyz.x / sum, xyz.y / sum)
    }
}

/// The normalized primary matrix (RGB to XYZ) of `primaries`.
///
/// The columns are the primaries at unit luminance, each scaled so that
/// RGB `(1, 1, 1)` lands exactly on the white point.
///
/// ```rust
/// use dichroma_primaries::{SRGB, rgb_to_xyz_matrix};
/// use dichroma_math::Vec3;
///
/// let white = rgb_to_xyz_matrix(&SRGB) * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let [r, g, b] = [primaries.r, primaries.g, primaries.b].map(unit_luminance_xyz);
    let unscaled = Mat3::from_col_vecs(r, g, b);
    let gain = unscaled
        .inverse()
        .map_or(Vec3::ONE, |inv| inv * primaries.white_xyz());
    Mat3::from_col_vecs(r * gain.x, g * gain.y, b * gain.z)
}

/// XYZ to RGB; the inverse of [`rgb_to_xyz_matrix`], or the identity for a
/// degenerate gamut.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// RGB to XYZ matrix followed by a Bradford adaptation to `dst_white`.
///
/// ```rust
/// use dichroma_primaries::{SRGB, D50_XY, adapted_rgb_to_xyz_matrix, chromaticity};
/// use dichroma_math::Vec3;
///
/// let m = adapted_rgb_to_xyz_matrix(&SRGB, D50_XY);
/// let (x, y) = chromaticity(m * Vec3::ONE);
/// assert!((x - D50_XY.0).abs() < 1e-9 && (y - D50_XY.1).abs() < 1e-9);
/// ```
pub fn adapted_rgb_to_xyz_matrix(primaries: &Primaries, dst_white: (f64, f64)) -> Mat3 {
    let cat = adapt_matrix(
        BRADFORD,
        primaries.white_xyz(),
        unit_luminance_xyz(dst_white),
    );
    cat * rgb_to_xyz_matrix(primaries)
}

/// sRGB to XYZ under its own D65 white.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// sRGB to XYZ, Bradford-adapted from D65 to D50.
///
/// Every conversion in the simulation goes through this matrix.
pub const SRGB_TO_XYZ_D50: Mat3 = Mat3::from_rows([
    [0.4360747, 0.3850649, 0.1430804],
    [0.2225045, 0.7168786, 0.0606169],
    [0.0139322, 0.0971045, 0.7141733],
]);

/// Inverse of [`SRGB_TO_XYZ_D50`].
pub const XYZ_D50_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.1338561, -1.6168667, -0.4906146],
    [-0.9787684, 1.9161415, 0.0334540],
    [0.0719453, -0.2289914, 1.4052427],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn derived_srgb_matches_published() {
        let m = rgb_to_xyz_matrix(&SRGB);
        assert!(m.max_abs_diff(&SRGB_TO_XYZ) < 5e-4, "{m:?}");
    }

    #[test]
    fn test_adapted_matrix_matches_constant() {
        let m = adapted_rgb_to_xyz_matrix(&SRGB, D50_XY);
        assert!(m.max_abs_diff(&SRGB_TO_XYZ_D50) < 5e-4, "{m:?}");
    }

    #[test]
    fn test_d50_inverse_matches_constant() {
        let inv = SRGB_TO_XYZ_D50.inverse().unwrap();
        assert!(inv.max_abs_diff(&XYZ_D50_TO_SRGB) < 1e-6);
        let id = XYZ_D50_TO_SRGB * SRGB_TO_XYZ_D50;
        assert!(id.max_abs_diff(&Mat3::IDENTITY) < 1e-6);
    }

    #[test]
    fn forward_then_inverse() {
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = xyz_to_rgb_matrix(&SRGB) * (rgb_to_xyz_matrix(&SRGB) * rgb);
        assert_abs_diff_eq!(rgb.x, back.x, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb.y, back.y, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb.z, back.z, epsilon = 1e-12);
    }

    #[test]
    fn test_from_matrix_unadapted() {
        let p = Primaries::from_matrix(&rgb_to_xyz_matrix(&SRGB), "sRGB");
        for (got, want) in [(p.r, SRGB.r), (p.g, SRGB.g), (p.b, SRGB.b), (p.w, SRGB.w)] {
            assert_abs_diff_eq!(got.0, want.0, epsilon = 1e-9);
            assert_abs_diff_eq!(got.1, want.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_from_matrix_d50() {
        let p = Primaries::from_matrix(&SRGB_TO_XYZ_D50, "sRGB (D50)");
        assert_abs_diff_eq!(p.w.0, D50_XY.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.w.1, D50_XY.1, epsilon = 1e-4);
        // Adaptation moves the primaries, green the furthest.
        assert_abs_diff_eq!(p.r.0, 0.6484, epsilon = 1e-3);
        assert_abs_diff_eq!(p.g.0, 0.3211, epsilon = 1e-3);
        assert_abs_diff_eq!(p.b.1, 0.0660, epsilon = 1e-3);
    }

    #[test]
    fn test_chromaticity_zero() {
        assert_eq!(chromaticity(Vec3::ZERO), (0.0, 0.0));
    }
}
