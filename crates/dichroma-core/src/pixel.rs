//! 8-bit RGBA pixel.
//!
//! [`Rgba8`] is the unit a [`PixelSource`](crate::PixelSource) hands out and a
//! [`PixelSink`](crate::PixelSink) accepts. The simulation only touches the
//! color channels; alpha travels through untouched.

use crate::color::{CHANNEL_MAX, CHANNEL_MIN, Rgb};

/// A single RGBA pixel with 8 bits per channel.
///
/// `#[repr(C)]` so a `[Rgba8]` has the same layout as interleaved
/// `[R G B A R G B A ...]` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba8 {
    /// Creates a new pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a pixel from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(a: [u8; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color channels as an [`Rgb`].
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::from_u8(self.r, self.g, self.b)
    }

    /// Builds a pixel from a color and an alpha value.
    ///
    /// Channels are rounded to the nearest integer and clamped to [0, 255],
    /// so callers should hand in display colors.
    ///
    /// ```rust
    /// use dichroma_core::{Rgb, Rgba8};
    ///
    /// let px = Rgba8::from_rgb(Rgb::new(12.4, 300.0, -2.0), 7);
    /// assert_eq!(px, Rgba8::new(12, 255, 0, 7));
    /// ```
    #[inline]
    pub fn from_rgb(rgb: Rgb, a: u8) -> Self {
        Self::new(to_u8(rgb.r), to_u8(rgb.g), to_u8(rgb.b), a)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(a: [u8; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(p: Rgba8) -> Self {
        p.to_array()
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    // NaN clamps to 0 via the float-to-int cast.
    v.round().clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}
