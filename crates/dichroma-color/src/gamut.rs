//! Keeping simulated colors displayable.
//!
//! The point where a confusion line meets the vision curve can lie outside
//! the triangle spanned by the display primaries. [`GamutTriangle::correct`]
//! slides it back along the confusion line onto the triangle edge, and
//! [`to_display`] rounds and clamps whatever is still out of range.

use dichroma_core::color::{CHANNEL_MAX, CHANNEL_MIN};
use dichroma_core::{Rgb, Xyy};
use dichroma_math::Line;
use tracing::trace;

use crate::error::{SimError, SimResult};
use crate::space::{reference, xyy_to_rgb};

/// The display gamut in the chromaticity plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutTriangle {
    /// Red primary `(x, y)`
    pub red: (f64, f64),
    /// Green primary `(x, y)`
    pub green: (f64, f64),
    /// Blue primary `(x, y)`
    pub blue: (f64, f64),
}

impl GamutTriangle {
    /// The sRGB triangle from [`reference()`].
    pub fn srgb() -> Self {
        let r = reference();
        Self {
            red: r.red.chromaticity(),
            green: r.green.chromaticity(),
            blue: r.blue.chromaticity(),
        }
    }

    /// The upper edge facing `x`: blue-green left of the green primary,
    /// green-red otherwise.
    pub fn edge_for(&self, x: f64) -> Option<Line> {
        if x < self.green.0 {
            Line::through(self.blue, self.green)
        } else {
            Line::through(self.green, self.red)
        }
    }

    /// Moves `xyy` onto the triangle if it lies above the facing edge.
    ///
    /// The new chromaticity is where `line` crosses that edge; luminance is
    /// kept. Returns the (possibly unchanged) point and whether it moved.
    /// Points below the triangle's lower edge are left alone.
    pub fn correct(&self, line: &Line, xyy: Xyy) -> (Xyy, bool) {
        let Some(edge) = self.edge_for(xyy.x) else {
            return (xyy, false);
        };
        if xyy.y <= edge.at(xyy.x) {
            return (xyy, false);
        }
        match edge.intersect(line) {
            Some(xy) => {
                trace!(from_x = xyy.x, from_y = xyy.y, to_x = xy.0, to_y = xy.1, "reprojected onto gamut edge");
                (xyy.with_chromaticity(xy), true)
            }
            None => (xyy, false),
        }
    }

    /// Returns true if `xy` lies inside the triangle or on its boundary.
    ///
    /// ```rust
    /// use dichroma_color::GamutTriangle;
    ///
    /// let gamut = GamutTriangle::srgb();
    /// assert!(gamut.contains((0.35, 0.36)));
    /// assert!(!gamut.contains((0.747, 0.253)));
    /// ```
    pub fn contains(&self, xy: (f64, f64)) -> bool {
        let side = |a: (f64, f64), b: (f64, f64)| (b.0 - a.0) * (xy.1 - a.1) - (b.1 - a.1) * (xy.0 - a.0);
        let d0 = side(self.red, self.green);
        let d1 = side(self.green, self.blue);
        let d2 = side(self.blue, self.red);
        let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_neg && has_pos)
    }
}

/// A display color plus whether clamping changed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRgb {
    /// Rounded channels in [0, 255]
    pub rgb: Rgb,
    /// True if at least one rounded channel was outside [0, 255]
    pub clamped: bool,
}

/// Converts to RGB, rounds each channel and clamps it to [0, 255].
///
/// Lossy: a point the edge correction could not bring into gamut ends up at
/// the nearest channel bound.
pub fn to_display(xyy: Xyy) -> DisplayRgb {
    let raw = xyy_to_rgb(xyy);
    let rounded = raw.map(f64::round);
    let rgb = rounded.map(|c| {
        if c.is_nan() {
            CHANNEL_MIN
        } else {
            c.clamp(CHANNEL_MIN, CHANNEL_MAX)
        }
    });
    DisplayRgb {
        rgb,
        clamped: rgb != rounded,
    }
}

/// Checks that every channel is finite and in [0, 255].
///
/// # Errors
///
/// [`SimError::InvalidColor`] naming the first bad channel.
pub fn ensure_display(rgb: Rgb) -> SimResult<Rgb> {
    for (channel, value) in rgb.named_channels() {
        if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
            return Err(SimError::InvalidColor { channel, value });
        }
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_edge_choice() {
        let gamut = GamutTriangle::srgb();
        let left = gamut.edge_for(gamut.green.0 - 0.01).unwrap();
        let right = gamut.edge_for(gamut.green.0).unwrap();
        assert_abs_diff_eq!(left.at(gamut.blue.0), gamut.blue.1, epsilon = 1e-12);
        assert_abs_diff_eq!(right.at(gamut.red.0), gamut.red.1, epsilon = 1e-12);
    }

    #[test]
    fn test_correct_inside_untouched() {
        let gamut = GamutTriangle::srgb();
        let line = Line::new(0.0, 0.3);
        let inside = Xyy::new(0.35, 0.3, 0.4);
        assert_eq!(gamut.correct(&line, inside), (inside, false));
    }

    #[test]
    fn test_correct_moves_onto_edge() {
        let gamut = GamutTriangle::srgb();
        // Horizontal line at y = 0.65 lands above the green-red edge
        let line = Line::new(0.0, 0.65);
        let above = Xyy::new(0.35, 0.65, 0.2);
        let (moved, reprojected) = gamut.correct(&line, above);
        assert!(reprojected);
        assert_abs_diff_eq!(moved.y, 0.65, epsilon = 1e-12);
        assert_eq!(moved.luminance, 0.2);
        let edge = gamut.edge_for(0.35).unwrap();
        assert_abs_diff_eq!(edge.at(moved.x), moved.y, epsilon = 1e-12);
    }

    #[test]
    fn test_contains_vertices() {
        let gamut = GamutTriangle::srgb();
        assert!(gamut.contains(gamut.red));
        assert!(gamut.contains(gamut.green));
        assert!(gamut.contains(reference().white.chromaticity()));
        assert!(!gamut.contains((0.1, 0.8)));
    }

    #[test]
    fn test_to_display_clamps() {
        let out = to_display(Xyy::new(0.3, 0.253, 0.5));
        assert!(out.clamped);
        assert_eq!(out.rgb.b, 255.0);
        assert!(out.rgb.is_display());
    }

    #[test]
    fn test_to_display_white() {
        let out = to_display(reference().white);
        assert!(!out.clamped);
        assert_eq!(out.rgb, Rgb::WHITE);
    }

    #[test]
    fn test_ensure_display() {
        assert!(ensure_display(Rgb::new(0.0, 128.0, 255.0)).is_ok());
        match ensure_display(Rgb::new(0.0, 255.5, -1.0)) {
            Err(SimError::InvalidColor { channel, value }) => {
                assert_eq!(channel, 'G');
                assert_eq!(value, 255.5);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(ensure_display(Rgb::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(ensure_display(Rgb::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }
}
