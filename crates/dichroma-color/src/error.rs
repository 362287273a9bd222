//! Error types for the simulation.
//!
//! Degenerate numeric cases inside the engine (zero-sum XYZ, zero y in
//! xyY, a corrected point that still lands outside the display) are handled
//! where they occur and never show up here.

use thiserror::Error;

/// Simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// An input channel is outside [0, 255] or not finite.
    #[error("invalid color: channel {channel} = {value} is outside [0, 255]")]
    InvalidColor {
        /// Channel name (`'R'`, `'G'` or `'B'`).
        channel: char,
        /// Offending value.
        value: f64,
    },

    /// A mathematical precondition of the model did not hold.
    ///
    /// Reaching this with the built-in protanopia model is a bug.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),

    /// A dichromacy profile is unusable.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// Profile YAML could not be parsed or written.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error while reading a profile.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Creates an [`SimError::InternalInvariant`].
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InternalInvariant(msg.into())
    }

    /// Creates an [`SimError::InvalidProfile`].
    pub fn profile(msg: impl Into<String>) -> Self {
        Self::InvalidProfile(msg.into())
    }

    /// Returns true for [`SimError::InvalidColor`].
    pub fn is_invalid_color(&self) -> bool {
        matches!(self, Self::InvalidColor { .. })
    }
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
