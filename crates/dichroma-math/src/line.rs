//! Straight lines in the chromaticity plane.

/// `y = slope*x + intercept`.
///
/// Vertical lines cannot be represented; constructors return `None` for
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Rise over run
    pub slope: f64,
    /// Value at `x = 0`
    pub intercept: f64,
}

impl Line {
    /// Creates a line from slope and intercept.
    #[inline]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Line through two points.
    ///
    /// The points are ordered by x before the slope is taken, so
    /// `through(p, q) == through(q, p)` bit for bit. Returns `None` when
    /// both points share an x coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_math::Line;
    ///
    /// let l = Line::through((0.0, 1.0), (2.0, 5.0)).unwrap();
    /// assert_eq!(l, Line::new(2.0, 1.0));
    /// assert!(Line::through((1.0, 0.0), (1.0, 9.0)).is_none());
    /// ```
    pub fn through(p: (f64, f64), q: (f64, f64)) -> Option<Self> {
        let (lo, hi) = if p.0 <= q.0 { (p, q) } else { (q, p) };
        let slope = (hi.1 - lo.1) / (hi.0 - lo.0);
        if !slope.is_finite() {
            return None;
        }
        Some(Self::new(slope, lo.1 - slope * lo.0))
    }

    /// Evaluates the line at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Intersection point with `other`, `None` for parallel lines.
    pub fn intersect(&self, other: &Line) -> Option<(f64, f64)> {
        let run = self.slope - other.slope;
        if run == 0.0 {
            return None;
        }
        let x = (other.intercept - self.intercept) / run;
        x.is_finite().then(|| (x, self.at(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_through_is_symmetric() {
        let p = (0.747, 0.253);
        let q = (0.3127, 0.3290);
        assert_eq!(Line::through(p, q), Line::through(q, p));
    }

    #[test]
    fn test_through_contains_points() {
        let l = Line::through((0.15, 0.06), (0.3, 0.6)).unwrap();
        assert_abs_diff_eq!(l.at(0.15), 0.06, epsilon = 1e-12);
        assert_abs_diff_eq!(l.at(0.3), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_horizontal() {
        let l = Line::through((0.0, 0.25), (1.0, 0.25)).unwrap();
        assert_eq!(l.slope, 0.0);
        assert_eq!(l.at(100.0), 0.25);
    }

    #[test]
    fn test_vertical_is_none() {
        assert!(Line::through((0.5, 0.1), (0.5, 0.9)).is_none());
    }

    #[test]
    fn test_intersect() {
        let a = Line::new(1.0, 0.0);
        let b = Line::new(-1.0, 2.0);
        let (x, y) = a.intersect(&b).unwrap();
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_is_none() {
        assert!(Line::new(0.5, 0.0).intersect(&Line::new(0.5, 1.0)).is_none());
    }
}
