//! Dichromacy profiles.
//!
//! A [`Dichromacy`] names the copunctal point all confusion lines meet in
//! and the two spectral anchors the vision curve passes through. The
//! built-in [`Dichromacy::PROTANOPIA`] needs no file; others are loaded
//! from YAML:
//!
//! ```yaml
//! name: protanopia
//! copunctal: [0.747, 0.253]
//! anchors:
//!   - [0.12412, 0.05780]
//!   - [0.47877, 0.52020]
//! ```

use std::borrow::Cow;
use std::path::Path;

use dichroma_primaries::copunctal::PROTAN;
use dichroma_primaries::spectral::{LOCUS_470, LOCUS_575};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::VisionCurve;
use crate::error::{SimError, SimResult};
use crate::gamut::GamutTriangle;
use crate::space::reference;

/// Parameters of a dichromatic observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dichromacy {
    /// Display name
    pub name: Cow<'static, str>,
    /// Copunctal point `(x, y)`
    pub copunctal: (f64, f64),
    /// Spectral anchors `(x, y)` of the vision curve
    pub anchors: [(f64, f64); 2],
}

impl Dichromacy {
    /// Protanopia: copunctal point (0.747, 0.253), anchors at 470 nm and 575 nm.
    pub const PROTANOPIA: Dichromacy = Dichromacy {
        name: Cow::Borrowed("protanopia"),
        copunctal: PROTAN,
        anchors: [LOCUS_470.xy(), LOCUS_575.xy()],
    };

    /// Parses and validates a YAML profile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_color::Dichromacy;
    ///
    /// let yaml = "name: protanopia\ncopunctal: [0.747, 0.253]\nanchors: [[0.12412, 0.0578], [0.47877, 0.5202]]\n";
    /// let d = Dichromacy::from_yaml_str(yaml).unwrap();
    /// assert_eq!(d, Dichromacy::PROTANOPIA);
    /// ```
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        let profile: Self = serde_yaml::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads, parses and validates a YAML profile file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let profile = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), name = %profile.name, "loaded dichromacy profile");
        Ok(profile)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> SimResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that the profile can drive a simulation.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidProfile`] when
    /// - a coordinate is not finite
    /// - the anchors and the white point do not have distinct x
    /// - the copunctal point lies inside the display gamut
    pub fn validate(&self) -> SimResult<()> {
        let points = [self.copunctal, self.anchors[0], self.anchors[1]];
        if let Some(bad) = points.iter().find(|p| !(p.0.is_finite() && p.1.is_finite())) {
            return Err(SimError::profile(format!(
                "{}: coordinate {bad:?} is not finite",
                self.name
            )));
        }
        self.vision_curve()?;
        if GamutTriangle::srgb().contains(self.copunctal) {
            return Err(SimError::profile(format!(
                "{}: copunctal point {:?} lies inside the display gamut",
                self.name, self.copunctal
            )));
        }
        Ok(())
    }

    /// The vision curve through the anchors and the display white.
    pub fn vision_curve(&self) -> SimResult<VisionCurve> {
        VisionCurve::build(
            self.anchors[0],
            self.anchors[1],
            reference().white.chromaticity(),
        )
    }
}

impl Default for Dichromacy {
    fn default() -> Self {
        Self::PROTANOPIA
    }
}
