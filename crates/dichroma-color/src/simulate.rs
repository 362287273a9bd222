//! The simulation entry point.
//!
//! [`Simulator`] chains the steps for one color:
//!
//! ```text
//! Rgb --validate--> xyY --confusion line--> curve intersection
//!     --gamut correction--> xyY --round/clamp--> Rgb
//! ```
//!
//! A simulator holds only immutable data and is `Send + Sync`; one instance
//! can serve any number of threads.

use std::sync::OnceLock;

use dichroma_core::{Rgb, Xyy};
use dichroma_primaries::copunctal::PROTAN;

use crate::confusion::ConfusionLineSolver;
use crate::curve::VisionCurve;
use crate::error::{SimError, SimResult};
use crate::gamut::{GamutTriangle, ensure_display, to_display};
use crate::profile::Dichromacy;

/// Every intermediate of one simulated color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    /// The input color
    pub input: Rgb,
    /// The input in xyY
    pub input_xyy: Xyy,
    /// Confusion line / vision curve intersection
    pub solved: Xyy,
    /// `solved` after gamut correction
    pub corrected: Xyy,
    /// True if gamut correction moved the point
    pub reprojected: bool,
    /// True if a channel had to be clamped to [0, 255]
    pub clamped: bool,
    /// The simulated display color
    pub output: Rgb,
}

/// Simulates how a dichromat perceives display colors.
///
/// # Example
///
/// ```rust
/// use dichroma_color::Simulator;
/// use dichroma_core::Rgb;
///
/// let sim = Simulator::protanopia();
/// let seen = sim.simulate(Rgb::new(255.0, 0.0, 0.0)).unwrap();
/// assert!(seen.is_display());
/// assert_eq!(sim.simulate(Rgb::WHITE).unwrap(), Rgb::WHITE);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    dichromacy: Dichromacy,
    solver: ConfusionLineSolver,
    gamut: GamutTriangle,
}

impl Simulator {
    /// Builds a simulator for a validated profile.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidProfile`] if `dichromacy` fails validation.
    pub fn new(dichromacy: Dichromacy) -> SimResult<Self> {
        dichromacy.validate()?;
        let curve = dichromacy.vision_curve()?;
        Ok(Self {
            solver: ConfusionLineSolver::new(dichromacy.copunctal, curve),
            gamut: GamutTriangle::srgb(),
            dichromacy,
        })
    }

    /// The shared protanopia simulator.
    pub fn protanopia() -> &'static Simulator {
        static PROTANOPIA: OnceLock<Simulator> = OnceLock::new();
        PROTANOPIA.get_or_init(|| Self {
            dichromacy: Dichromacy::PROTANOPIA,
            solver: ConfusionLineSolver::new(PROTAN, *VisionCurve::protanopia()),
            gamut: GamutTriangle::srgb(),
        })
    }

    /// The profile this simulator was built from.
    #[inline]
    pub fn dichromacy(&self) -> &Dichromacy {
        &self.dichromacy
    }

    /// The vision curve in use.
    #[inline]
    pub fn curve(&self) -> &VisionCurve {
        self.solver.curve()
    }

    /// The gamut triangle used for correction.
    #[inline]
    pub fn gamut(&self) -> &GamutTriangle {
        &self.gamut
    }

    /// Simulates one color.
    ///
    /// # Errors
    ///
    /// See [`simulate_detailed`](Self::simulate_detailed).
    #[inline]
    pub fn simulate(&self, rgb: Rgb) -> SimResult<Rgb> {
        self.simulate_detailed(rgb).map(|s| s.output)
    }

    /// Simulates one color and keeps the intermediates.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidColor`] if a channel is outside [0, 255]
    /// - [`SimError::InternalInvariant`] if the model's geometry fails
    pub fn simulate_detailed(&self, rgb: Rgb) -> SimResult<Simulation> {
        let solution = self.solver.solve(rgb)?;
        let (corrected, reprojected) = self.gamut.correct(&solution.line, solution.xyy);
        let display = to_display(corrected);
        let output = ensure_display(display.rgb)
            .map_err(|e| SimError::invariant(format!("simulated {rgb} is not displayable: {e}")))?;
        Ok(Simulation {
            input: rgb,
            input_xyy: solution.input,
            solved: solution.xyy,
            corrected,
            reprojected,
            clamped: display.clamped,
            output,
        })
    }
}

/// Simulates protanopia for one color with the shared simulator.
pub fn simulate_protanopia(rgb: Rgb) -> SimResult<Rgb> {
    Simulator::protanopia().simulate(rgb)
}
