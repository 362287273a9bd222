//! Root-mean-square color difference.
//!
//! Each pixel contributes the Euclidean distance between the XYZ of its
//! original and simulated colors:
//!
//! ```text
//! RMSD = sqrt( sum(d^2) / (width * height) )
//! ```
//!
//! [`RmsdAccumulator`] keeps the running sum so rows processed on different
//! threads can be merged.

use dichroma_color::space::rgb_to_xyz;
use dichroma_core::{PixelSource, Rgb};

use crate::{OpsError, OpsResult};

/// XYZ distance between two display colors.
#[inline]
pub fn pixel_distance(a: Rgb, b: Rgb) -> f64 {
    rgb_to_xyz(a).distance(rgb_to_xyz(b))
}

/// Running sum of squared distances.
///
/// # Example
///
/// ```rust
/// use dichroma_ops::RmsdAccumulator;
///
/// let mut acc = RmsdAccumulator::new();
/// acc.push(3.0);
/// acc.push(4.0);
/// assert!((acc.finish() - 12.5f64.sqrt()).abs() < 1e-12);
/// assert_eq!(RmsdAccumulator::new().finish(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RmsdAccumulator {
    sum_sq: f64,
    count: usize,
}

impl RmsdAccumulator {
    /// Empty accumulator.
    pub const fn new() -> Self {
        Self {
            sum_sq: 0.0,
            count: 0,
        }
    }

    /// Adds one pixel's distance.
    #[inline]
    pub fn push(&mut self, distance: f64) {
        self.sum_sq += distance * distance;
        self.count += 1;
    }

    /// Adds the distance between an original and a simulated color.
    #[inline]
    pub fn push_pair(&mut self, original: Rgb, simulated: Rgb) {
        self.push(pixel_distance(original, simulated));
    }

    /// Folds another accumulator into this one.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        self.sum_sq += other.sum_sq;
        self.count += other.count;
    }

    /// Number of pixels seen.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The RMSD; 0 when nothing was pushed.
    pub fn finish(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.sum_sq / self.count as f64).sqrt()
        }
    }
}

/// RMSD between two equally sized buffers.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] if the sizes differ.
pub fn rmsd(a: &impl PixelSource, b: &impl PixelSource) -> OpsResult<f64> {
    if a.dimensions() != b.dimensions() {
        return Err(OpsError::DimensionMismatch {
            src: a.dimensions(),
            dst: b.dimensions(),
        });
    }
    let mut acc = RmsdAccumulator::new();
    for row in 0..a.height() {
        for col in 0..a.width() {
            acc.push_pair(a.get(row, col).rgb(), b.get(row, col).rgb());
        }
    }
    Ok(acc.finish())
}
