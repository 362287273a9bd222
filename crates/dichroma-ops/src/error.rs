//! Error types for buffer operations.

use dichroma_color::SimError;
use thiserror::Error;

/// Error type for buffer operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Source and destination buffers differ in size.
    #[error("size mismatch: source is {}x{}, destination is {}x{}", src.0, src.1, dst.0, dst.1)]
    DimensionMismatch {
        /// Source `(width, height)`
        src: (u32, u32),
        /// Destination `(width, height)`
        dst: (u32, u32),
    },

    /// A pixel could not be simulated; the whole run is abandoned.
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimError),

    /// Buffer construction failed.
    #[error(transparent)]
    Core(#[from] dichroma_core::Error),
}

/// Result type for buffer operations.
pub type OpsResult<T> = Result<T, OpsError>;
