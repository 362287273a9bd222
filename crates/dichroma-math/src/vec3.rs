//! Three-component f64 vectors.

use std::ops::{Add, Index, Mul, Sub};

/// A linear RGB or XYZ triple.
///
/// ```rust
/// use dichroma_math::Vec3;
///
/// let xyz = Vec3::new(0.2, 0.3, 0.5);
/// assert_eq!(xyz[1], 0.3);
/// assert_eq!(xyz.sum(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First component (R or X)
    pub x: f64,
    /// Second component (G or Y)
    pub y: f64,
    /// Third component (B or Z)
    pub z: f64,
}

impl Vec3 {
    /// `(0, 0, 0)`
    pub const ZERO: Self = Self::splat(0.0);

    /// `(1, 1, 1)`; linear RGB white.
    pub const ONE: Self = Self::splat(1.0);

    /// `(x, y, z)`
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The same value in every component.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// `[x, y, z]` to a vector.
    #[inline]
    pub const fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// The vector as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Scalar product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Vector product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// `x + y + z`
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Component-wise `f`.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// Component-wise `f(self, rhs)`.
    #[inline]
    pub fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }

    /// Largest component-wise `|self - other|`.
    #[inline]
    pub fn max_abs_diff_to(self, other: Self) -> f64 {
        let d = (self - other).map(f64::abs);
        d.x.max(d.y).max(d.z)
    }

    /// No NaN or infinite component.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("component {i} of a 3-vector"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        self.map(|c| c * k)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}
