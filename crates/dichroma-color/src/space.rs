//! Conversions between display sRGB, XYZ and xyY.
//!
//! All conversions use the D50-adapted sRGB matrices from
//! [`dichroma_primaries`] and the sRGB transfer function. RGB values are on
//! the [0, 255] display scale; [`xyz_to_rgb`] does not clamp.
//!
//! # Reference chromaticities
//!
//! [`reference()`] holds the white point and the three primaries in xyY,
//! read back from the conversion matrix the first time it is called:
//!
//! ```rust
//! use dichroma_color::space::{reference, rgb_to_xyy};
//! use dichroma_core::Rgb;
//!
//! let red = rgb_to_xyy(Rgb::new(255.0, 0.0, 0.0));
//! assert_eq!(red, reference().red);
//! ```

use std::sync::OnceLock;

use dichroma_core::{Rgb, Xyy, Xyz};
use dichroma_math::Vec3;
use dichroma_primaries::{Primaries, SRGB_TO_XYZ_D50, XYZ_D50_TO_SRGB};
use dichroma_transfer::srgb;

/// White point and display primaries in xyY.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    /// Image of RGB white; luminance 1
    pub white: Xyy,
    /// Image of pure red
    pub red: Xyy,
    /// Image of pure green
    pub green: Xyy,
    /// Image of pure blue
    pub blue: Xyy,
}

static REFERENCE: OnceLock<Reference> = OnceLock::new();

/// The process-wide reference chromaticities.
pub fn reference() -> &'static Reference {
    REFERENCE.get_or_init(compute_reference)
}

fn compute_reference() -> Reference {
    let p = Primaries::from_matrix(&SRGB_TO_XYZ_D50, "sRGB (D50)");
    let white = Xyy::new(p.w.0, p.w.1, (SRGB_TO_XYZ_D50 * Vec3::ONE).y);
    // Primaries never have a zero XYZ sum, the white fallback is not reached.
    let primary = |rgb| xyz_to_xyy_or(rgb_to_xyz(rgb), p.w);
    Reference {
        white,
        red: primary(Rgb::new(255.0, 0.0, 0.0)),
        green: primary(Rgb::new(0.0, 255.0, 0.0)),
        blue: primary(Rgb::new(0.0, 0.0, 255.0)),
    }
}

/// Display RGB to XYZ: channel/255, sRGB EOTF, then the D50 matrix.
///
/// ```rust
/// use dichroma_color::space::rgb_to_xyz;
/// use dichroma_core::Rgb;
///
/// let white = rgb_to_xyz(Rgb::WHITE);
/// assert!((white.y - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = Vec3::from_array(srgb::decode(rgb));
    Xyz::from_array((SRGB_TO_XYZ_D50 * linear).to_array())
}

/// XYZ to display RGB; channels are not clamped.
#[inline]
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    srgb::encode((XYZ_D50_TO_SRGB * Vec3::from_array(xyz.to_array())).to_array())
}

/// XYZ to xyY.
///
/// A zero sum (black) has no chromaticity; the white point's is used and
/// the luminance is kept.
#[inline]
pub fn xyz_to_xyy(xyz: Xyz) -> Xyy {
    xyz_to_xyy_or(xyz, reference().white.chromaticity())
}

fn xyz_to_xyy_or(xyz: Xyz, white: (f64, f64)) -> Xyy {
    let sum = xyz.sum();
    if sum == 0.0 {
        Xyy::new(white.0, white.1, xyz.y)
    } else {
        Xyy::new(xyz.x / sum, xyz.y / sum, xyz.y)
    }
}

/// xyY to XYZ; `y == 0` maps to zero.
#[inline]
pub fn xyy_to_xyz(xyy: Xyy) -> Xyz {
    if xyy.y == 0.0 {
        return Xyz::ZERO;
    }
    let scale = xyy.luminance / xyy.y;
    Xyz::new(xyy.x * scale, xyy.luminance, (1.0 - xyy.x - xyy.y) * scale)
}

/// [`rgb_to_xyz`] then [`xyz_to_xyy`].
#[inline]
pub fn rgb_to_xyy(rgb: Rgb) -> Xyy {
    xyz_to_xyy(rgb_to_xyz(rgb))
}

/// [`xyy_to_xyz`] then [`xyz_to_rgb`].
#[inline]
pub fn xyy_to_rgb(xyy: Xyy) -> Rgb {
    xyz_to_rgb(xyy_to_xyz(xyy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use dichroma_primaries::D50_XY;

    #[test]
    fn test_white_point_is_d50() {
        let w = reference().white;
        assert_abs_diff_eq!(w.x, D50_XY.0, epsilon = 1e-4);
        assert_abs_diff_eq!(w.y, D50_XY.1, epsilon = 1e-4);
        assert_abs_diff_eq!(w.luminance, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_primaries() {
        let r = reference();
        assert_abs_diff_eq!(r.red.x, 0.64, epsilon = 0.01);
        assert_abs_diff_eq!(r.red.y, 0.33, epsilon = 0.01);
        assert_abs_diff_eq!(r.blue.x, 0.15, epsilon = 0.01);
        assert_abs_diff_eq!(r.blue.y, 0.06, epsilon = 0.01);
        assert_abs_diff_eq!(r.green.y, 0.60, epsilon = 0.01);
        // D50 adaptation pulls green towards red.
        assert_abs_diff_eq!(r.green.x, 0.30, epsilon = 0.025);
    }

    #[test]
    fn test_black_uses_white_chromaticity() {
        let black = rgb_to_xyy(Rgb::BLACK);
        assert_eq!(black.chromaticity(), reference().white.chromaticity());
        assert_eq!(black.luminance, 0.0);
        assert_eq!(xyy_to_xyz(black), Xyz::ZERO);
    }

    #[test]
    fn test_zero_y_is_zero() {
        assert_eq!(xyy_to_xyz(Xyy::new(0.3, 0.0, 0.7)), Xyz::ZERO);
    }

    #[test]
    fn test_xyy_xyz_inverse() {
        let xyz = Xyz::new(0.2, 0.3, 0.4);
        let back = xyy_to_xyz(xyz_to_xyy(xyz));
        assert_abs_diff_eq!(back.x, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_xyz_to_rgb_not_clamped() {
        let rgb = xyy_to_rgb(Xyy::new(0.3, 0.253, 0.5));
        assert!(rgb.b > 255.0, "{rgb}");
    }

    #[test]
    fn test_white_roundtrip() {
        let back = xyy_to_rgb(rgb_to_xyy(Rgb::WHITE));
        assert!(back.max_channel_diff(Rgb::WHITE) < 1e-3, "{back}");
    }
}
