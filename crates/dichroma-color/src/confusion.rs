//! Confusion lines.
//!
//! Every chromaticity on a line through the copunctal point looks the same
//! to the dichromat. The solver draws that line through the input color and
//! intersects it with the [`VisionCurve`].

use dichroma_core::{Rgb, Xyy};
use dichroma_math::Line;

use crate::curve::VisionCurve;
use crate::error::{SimError, SimResult};
use crate::gamut::ensure_display;
use crate::space::rgb_to_xyy;

/// Output of [`ConfusionLineSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The input color in xyY
    pub input: Xyy,
    /// Confusion line through the copunctal point and the input
    pub line: Line,
    /// Intersection with the vision curve; input luminance kept
    pub xyy: Xyy,
}

/// Intersects confusion lines with a vision curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionLineSolver {
    copunctal: (f64, f64),
    curve: VisionCurve,
}

impl ConfusionLineSolver {
    /// Creates a solver for the given copunctal point and curve.
    pub fn new(copunctal: (f64, f64), curve: VisionCurve) -> Self {
        Self { copunctal, curve }
    }

    /// The copunctal point.
    #[inline]
    pub fn copunctal(&self) -> (f64, f64) {
        self.copunctal
    }

    /// The vision curve.
    #[inline]
    pub fn curve(&self) -> &VisionCurve {
        &self.curve
    }

    /// The confusion line through `xy`.
    ///
    /// # Errors
    ///
    /// [`SimError::InternalInvariant`] if the line would be vertical.
    pub fn line_through(&self, xy: (f64, f64)) -> SimResult<Line> {
        Line::through(self.copunctal, xy).ok_or_else(|| {
            SimError::invariant(format!(
                "confusion line through {:?} and {xy:?} is vertical",
                self.copunctal
            ))
        })
    }

    /// Finds where the confusion line of `rgb` meets the vision curve.
    ///
    /// Of the two roots of `a*x^2 + (b - m)*x + (c - k) = 0` the one at
    /// `(-b' + sqrt(disc)) / 2a` is taken; with a downward curve it is the
    /// one inside the display gamut. The y coordinate is read off the line.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidColor`] if a channel is outside [0, 255]
    /// - [`SimError::InternalInvariant`] for a vertical line or a line
    ///   that misses the curve
    pub fn solve(&self, rgb: Rgb) -> SimResult<Solution> {
        let rgb = ensure_display(rgb)?;
        let input = rgb_to_xyy(rgb);
        let line = self.line_through(input.chromaticity())?;
        let meet = self.curve.quadratic().sub_line(&line);
        let x = meet.root_plus().ok_or_else(|| {
            SimError::invariant(format!(
                "confusion line misses the vision curve for {rgb} (discriminant {})",
                meet.discriminant()
            ))
        })?;
        Ok(Solution {
            input,
            line,
            xyy: Xyy::new(x, line.at(x), input.luminance),
        })
    }
}
