//! The vision curve of a dichromat.
//!
//! A dichromat still sees two spectral colors and white the same way a
//! trichromat does. The parabola through those three chromaticities
//! approximates every color they can perceive; a simulated color is placed
//! where its confusion line crosses the curve.

use std::sync::OnceLock;

use dichroma_math::Quadratic;
use dichroma_primaries::spectral::{LOCUS_470, LOCUS_575};

use crate::error::{SimError, SimResult};
use crate::space::reference;

/// `y = a*x^2 + b*x + c` through two anchors and the white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionCurve {
    poly: Quadratic,
    anchors: [(f64, f64); 2],
    white: (f64, f64),
}

impl VisionCurve {
    /// Interpolates the curve through `anchor0`, `anchor1` and `white`.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidProfile`] if two of the points share an x
    /// coordinate or a coordinate is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_color::VisionCurve;
    ///
    /// let curve = VisionCurve::build((0.1, 0.1), (0.5, 0.5), (0.3, 0.35)).unwrap();
    /// assert!((curve.eval(0.3) - 0.35).abs() < 1e-12);
    /// assert!(VisionCurve::build((0.1, 0.1), (0.1, 0.5), (0.3, 0.35)).is_err());
    /// ```
    pub fn build(anchor0: (f64, f64), anchor1: (f64, f64), white: (f64, f64)) -> SimResult<Self> {
        let finite = [anchor0, anchor1, white]
            .iter()
            .all(|p| p.0.is_finite() && p.1.is_finite());
        if !finite {
            return Err(SimError::profile("vision curve points must be finite"));
        }
        let poly = Quadratic::lagrange(anchor0, anchor1, white).ok_or_else(|| {
            SimError::profile(format!(
                "vision curve points need distinct x: {anchor0:?}, {anchor1:?}, white {white:?}"
            ))
        })?;
        Ok(Self {
            poly,
            anchors: [anchor0, anchor1],
            white,
        })
    }

    /// Protanopia: 470 nm, 575 nm and the display white point.
    ///
    /// Built on first use and shared for the life of the process.
    pub fn protanopia() -> &'static VisionCurve {
        static PROTANOPIA: OnceLock<VisionCurve> = OnceLock::new();
        PROTANOPIA.get_or_init(|| {
            let white = reference().white.chromaticity();
            let anchors = [LOCUS_470.xy(), LOCUS_575.xy()];
            Self {
                poly: Quadratic::interpolate(anchors[0], anchors[1], white),
                anchors,
                white,
            }
        })
    }

    /// The curve's coefficients.
    #[inline]
    pub fn quadratic(&self) -> Quadratic {
        self.poly
    }

    /// Evaluates the curve at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.poly.eval(x)
    }

    /// The two anchor chromaticities.
    #[inline]
    pub fn anchors(&self) -> [(f64, f64); 2] {
        self.anchors
    }

    /// The white chromaticity the curve passes through.
    #[inline]
    pub fn white(&self) -> (f64, f64) {
        self.white
    }
}
