//! Quadratic polynomials in one variable.
//!
//! The vision curve of a dichromat is modelled as a parabola through three
//! chromaticities. [`Quadratic::lagrange`] builds it, [`Quadratic::sub_line`]
//! and [`Quadratic::root_plus`] intersect it with a straight line.

use crate::Line;

/// `y = a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    /// Coefficient of `x^2`
    pub a: f64,
    /// Coefficient of `x`
    pub b: f64,
    /// Constant term
    pub c: f64,
}

impl Quadratic {
    /// Creates a quadratic from its coefficients.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Parabola through three points by Lagrange interpolation.
    ///
    /// Each basis polynomial is expanded on its own and the three are
    /// summed coefficient by coefficient. Returns `None` when two points
    /// share an x coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_math::Quadratic;
    ///
    /// let q = Quadratic::lagrange((-1.0, 2.0), (0.0, 1.0), (1.0, 2.0)).unwrap();
    /// assert!((q.eval(2.0) - 5.0).abs() < 1e-12);
    /// assert!(Quadratic::lagrange((0.0, 0.0), (0.0, 1.0), (1.0, 1.0)).is_none());
    /// ```
    pub fn lagrange(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> Option<Self> {
        if p0.0 == p1.0 || p0.0 == p2.0 || p1.0 == p2.0 {
            return None;
        }
        let q = Self::interpolate(p0, p1, p2);
        q.is_finite().then_some(q)
    }

    /// [`lagrange`](Self::lagrange) without the checks.
    ///
    /// For points known to have distinct x coordinates. Duplicates give
    /// non-finite coefficients.
    pub fn interpolate(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> Self {
        basis(p0, p1, p2) + basis(p1, p0, p2) + basis(p2, p0, p1)
    }

    /// Returns true if all coefficients are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Evaluates the polynomial at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// `b^2 - 4ac`.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// The quadratic minus a line: `a*x^2 + (b - slope)*x + (c - intercept)`.
    ///
    /// Its roots are the x coordinates where the parabola meets `line`.
    #[inline]
    pub fn sub_line(&self, line: &Line) -> Self {
        Self::new(self.a, self.b - line.slope, self.c - line.intercept)
    }

    /// The root `(-b + sqrt(disc)) / 2a`.
    ///
    /// Returns `None` for a negative (or NaN) discriminant and for a
    /// degenerate `a == 0`.
    pub fn root_plus(&self) -> Option<f64> {
        let disc = self.discriminant();
        if disc.is_nan() || disc < 0.0 || self.a == 0.0 {
            return None;
        }
        Some((-self.b + disc.sqrt()) / (2.0 * self.a))
    }
}

impl std::ops::Add for Quadratic {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c)
    }
}

// y0 * (x - x1)(x - x2) / ((x0 - x1)(x0 - x2)), expanded.
#[inline]
fn basis(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> Quadratic {
    let a = p0.1 / ((p0.0 - p1.0) * (p0.0 - p2.0));
    Quadratic::new(a, -a * p1.0 - a * p2.0, a * p1.0 * p2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lagrange_passes_through_points() {
        let pts = [(0.12412, 0.05780), (0.47877, 0.52020), (0.3457, 0.3585)];
        let q = Quadratic::lagrange(pts[0], pts[1], pts[2]).unwrap();
        for (x, y) in pts {
            assert_abs_diff_eq!(q.eval(x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lagrange_order_independent() {
        let (p0, p1, p2) = ((1.0, 3.0), (2.0, -1.0), (5.0, 0.5));
        let a = Quadratic::lagrange(p0, p1, p2).unwrap();
        let b = Quadratic::lagrange(p2, p0, p1).unwrap();
        assert_abs_diff_eq!(a.a, b.a, epsilon = 1e-12);
        assert_abs_diff_eq!(a.b, b.b, epsilon = 1e-12);
        assert_abs_diff_eq!(a.c, b.c, epsilon = 1e-12);
    }

    #[test]
    fn test_lagrange_collinear_is_linear() {
        let q = Quadratic::lagrange((0.0, 1.0), (1.0, 3.0), (2.0, 5.0)).unwrap();
        assert_abs_diff_eq!(q.a, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.b, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.c, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lagrange_duplicate_x() {
        assert!(Quadratic::lagrange((1.0, 0.0), (2.0, 1.0), (1.0, 5.0)).is_none());
        assert!(!Quadratic::interpolate((1.0, 0.0), (2.0, 1.0), (1.0, 5.0)).is_finite());
    }

    #[test]
    fn test_root_plus() {
        // x^2 - 1
        let q = Quadratic::new(1.0, 0.0, -1.0);
        assert_eq!(q.discriminant(), 4.0);
        assert_eq!(q.root_plus(), Some(1.0));
        // -x^2 + 1: the "+" root is the smaller one when a < 0
        assert_eq!(Quadratic::new(-1.0, 0.0, 1.0).root_plus(), Some(-1.0));
    }

    #[test]
    fn test_root_plus_none() {
        assert!(Quadratic::new(1.0, 0.0, 1.0).root_plus().is_none());
        assert!(Quadratic::new(0.0, 1.0, 1.0).root_plus().is_none());
        assert!(Quadratic::new(f64::NAN, 0.0, 1.0).root_plus().is_none());
    }

    #[test]
    fn test_sub_line_meets_line() {
        let q = Quadratic::new(1.0, 0.0, 0.0);
        let line = Line::new(1.0, 2.0);
        let x = q.sub_line(&line).root_plus().unwrap();
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.eval(x), line.at(x), epsilon = 1e-12);
    }
}
