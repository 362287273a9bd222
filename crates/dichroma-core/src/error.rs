//! Pixel buffer errors.
//!
//! ```rust
//! use dichroma_core::{Error, RgbaImage};
//!
//! let img = RgbaImage::new(4, 4);
//! assert!(matches!(img.try_pixel(5, 0), Err(Error::OutOfBounds { row: 5, .. })));
//! ```

use thiserror::Error;

/// `std::result::Result` specialized to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures when building or reading a pixel buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `(row, col)` is not inside a `width` x `height` buffer.
    #[error("pixel (row {row}, col {col}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// Requested row
        row: u32,
        /// Requested column
        col: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Pixel data that cannot describe a `width` x `height` buffer: wrong
    /// length, or a size that overflows `usize`.
    #[error("cannot make a {width}x{height} buffer: {reason}")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// What was wrong with the data
        reason: String,
    },
}

impl Error {
    /// [`Error::OutOfBounds`] for `(row, col)` in a `width` x `height` buffer.
    #[inline]
    pub fn out_of_bounds(row: u32, col: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds { row, col, width, height }
    }

    /// [`Error::InvalidDimensions`] with a reason.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::InvalidDimensions { width, height, reason }
    }

    /// True for [`Error::OutOfBounds`].
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_message_names_coordinates() {
        let err = Error::out_of_bounds(7, 12, 10, 5);
        let msg = err.to_string();
        assert!(msg.contains("row 7") && msg.contains("col 12"), "{msg}");
        assert!(msg.contains("10x5"), "{msg}");
        assert!(err.is_bounds_error());
    }

    #[test]
    fn invalid_dimensions_keeps_reason() {
        let err = Error::invalid_dimensions(3, 2, "expected 24 bytes, got 7");
        assert_eq!(err.to_string(), "cannot make a 3x2 buffer: expected 24 bytes, got 7");
        assert!(!err.is_bounds_error());
    }
}
