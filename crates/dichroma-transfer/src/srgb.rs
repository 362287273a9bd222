//! The sRGB piecewise curve (IEC 61966-2-1).
//!
//! A short linear toe near black joins a 2.4 power segment; overall the
//! curve sits close to a plain 2.2 gamma.
//!
//! # Range
//!
//! - [`eotf`] / [`oetf`]: [0, 1] nominal. Values outside the range do not
//!   panic; negatives fall on the linear segment.
//! - [`decode`] / [`encode`]: display channels in [0, 255].

use dichroma_core::Rgb;
use dichroma_core::color::CHANNEL_MAX;

/// Encoded signal to linear light.
///
/// `v / 12.92` below `0.04045`, `((v + 0.055) / 1.055)^2.4` from there up.
///
/// ```rust
/// use dichroma_transfer::srgb::eotf;
///
/// // Mid-grey code value is about 21% linear light.
/// assert!((eotf(0.5) - 0.2140).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to encoded signal; inverse of [`eotf`].
///
/// `l * 12.92` up to `0.0031308`, `1.055 * l^(1/2.4) - 0.055` above.
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Display color in [0, 255] to linear `[r, g, b]`.
#[inline]
pub fn decode(rgb: Rgb) -> [f64; 3] {
    [
        eotf(rgb.r / CHANNEL_MAX),
        eotf(rgb.g / CHANNEL_MAX),
        eotf(rgb.b / CHANNEL_MAX),
    ]
}

/// Linear `[r, g, b]` to a display color scaled to [0, 255].
///
/// Not clamped: out-of-gamut linear values give channels outside the range.
#[inline]
pub fn encode(linear: [f64; 3]) -> Rgb {
    Rgb::new(
        oetf(linear[0]) * CHANNEL_MAX,
        oetf(linear[1]) * CHANNEL_MAX,
        oetf(linear[2]) * CHANNEL_MAX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn decode_then_encode_is_identity() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = oetf(eotf(v));
            assert_abs_diff_eq!(v, back, epsilon = 1e-12);
        }
    }

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_split() {
        // 0.04045 itself is on the power segment
        assert_abs_diff_eq!(eotf(0.04045), ((0.04045 + 0.055) / 1.055f64).powf(2.4), epsilon = 1e-15);
        assert_eq!(eotf(0.04), 0.04 / 12.92);
        assert_eq!(oetf(0.0031308), 0.0031308 * 12.92);
    }

    #[test]
    fn test_out_of_range() {
        assert!(eotf(-0.5) < 0.0);
        assert!(oetf(-0.1) < 0.0);
        assert!(oetf(1.5) > 1.0);
        assert!(eotf(2.0).is_finite());
    }

    #[test]
    fn test_decode_encode_channels() {
        for c in (0..=255).step_by(17) {
            let rgb = Rgb::from_u8(c, 255 - c, c / 2);
            let back = encode(decode(rgb));
            assert!(rgb.max_channel_diff(back) < 1e-9, "{rgb} -> {back}");
        }
    }
}
