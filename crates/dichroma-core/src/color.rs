//! Color value types.
//!
//! Three immutable value types, one per space the simulation works in:
//!
//! | Type | Components | Meaning |
//! |------|------------|---------|
//! | [`Rgb`] | r, g, b | display sRGB, nominally [0, 255] |
//! | [`Xyz`] | x, y, z | linear CIE tristimulus, `y` is luminance |
//! | [`Xyy`] | x, y, luminance | chromaticity plus luminance |
//!
//! All components are `f64`. [`Rgb`] channels may leave [0, 255] in
//! intermediate results (a color outside the display gamut); only values that
//! face a display get clamped.
//!
//! Conversions between the spaces live in `dichroma-color`; this module only
//! holds the data.

use std::fmt;

/// Lowest displayable channel value.
pub const CHANNEL_MIN: f64 = 0.0;

/// Highest displayable channel value.
pub const CHANNEL_MAX: f64 = 255.0;

/// An sRGB color with channels on the 0-255 scale.
///
/// # Example
///
/// ```rust
/// use dichroma_core::Rgb;
///
/// let red = Rgb::new(255.0, 0.0, 0.0);
/// assert!(red.is_display());
/// assert!(!Rgb::new(-1.0, 0.0, 300.0).is_display());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Creates a color from `[r, g, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns `('R', r), ('G', g), ('B', b)` for per-channel checks.
    #[inline]
    pub const fn named_channels(self) -> [(char, f64); 3] {
        [('R', self.r), ('G', self.g), ('B', self.b)]
    }

    /// Returns `true` when every channel lies in [0, 255].
    ///
    /// NaN channels are never displayable.
    #[inline]
    pub fn is_display(self) -> bool {
        self.to_array()
            .iter()
            .all(|c| (CHANNEL_MIN..=CHANNEL_MAX).contains(c))
    }

    /// Applies `f` to each channel.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Largest absolute per-channel difference to `other`.
    #[inline]
    pub fn max_channel_diff(self, other: Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A CIE XYZ tristimulus value.
///
/// `y` is luminance; `x` and `z` carry chromaticity jointly with `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus
    pub x: f64,
    /// Y tristimulus (luminance)
    pub y: f64,
    /// Z tristimulus
    pub z: f64,
}

impl Xyz {
    /// The zero tristimulus value (black).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a value from `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// `X + Y + Z`, the normalizer for chromaticity.
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Euclidean distance to `other`.
    ///
    /// ```rust
    /// use dichroma_core::Xyz;
    ///
    /// let d = Xyz::new(0.0, 0.0, 0.0).distance(Xyz::new(3.0, 4.0, 0.0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// A CIE xyY value: chromaticity `(x, y)` plus luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyy {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
    /// Y luminance
    pub luminance: f64,
}

impl Xyy {
    /// Creates a new value.
    #[inline]
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }

    /// Returns the `(x, y)` chromaticity.
    #[inline]
    pub const fn chromaticity(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns a value with the same luminance and a new chromaticity.
    ///
    /// ```rust
    /// use dichroma_core::Xyy;
    ///
    /// let moved = Xyy::new(0.3, 0.3, 0.5).with_chromaticity((0.4, 0.2));
    /// assert_eq!(moved, Xyy::new(0.4, 0.2, 0.5));
    /// ```
    #[inline]
    pub const fn with_chromaticity(self, xy: (f64, f64)) -> Self {
        Self::new(xy.0, xy.1, self.luminance)
    }
}
