// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::Point;

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBez {
    /// The curve's start point.
    pub p0: Point,
    /// The curve's control point.
    pub p1: Point,
    /// The curve's end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1]. Values outside that range
    /// extrapolate rather than error: the sampler's step search probes
    /// slightly past the end of a segment and clamps before accepting.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt) + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    /// The straight-line distance between the curve's endpoints.
    #[inline]
    pub fn chord(&self) -> f64 {
        self.p0.distance(self.p2)
    }

    /// Arc length of the segment, by the closed-form integral of the
    /// derivative's magnitude.
    ///
    /// When the control point is (nearly) collinear with the endpoints the
    /// leading coefficient vanishes and the formula degenerates; the curve is
    /// then a straight run and the chord length is returned instead. The same
    /// fallback covers any non-finite or non-positive result of the analytic
    /// expression.
    pub fn arclen(&self) -> f64 {
        let ax = self.p0.x - 2.0 * self.p1.x + self.p2.x;
        let ay = self.p0.y - 2.0 * self.p1.y + self.p2.y;
        let bx = 2.0 * (self.p1.x - self.p0.x);
        let by = 2.0 * (self.p1.y - self.p0.y);

        let a = 4.0 * (ax * ax + ay * ay);
        let b = 4.0 * (ax * bx + ay * by);
        let c = bx * bx + by * by;

        if a <= f64::EPSILON {
            return self.chord();
        }

        let sa = a.sqrt();
        let sabc = (a + b + c).sqrt();
        let a32 = sa * a;
        let log_num = 2.0 * sa + b / sa + 2.0 * sabc;
        let log_den = b / sa + 2.0 * c.sqrt();

        let len = (4.0 * a32 * sabc
            + 2.0 * sa * b * (sabc - c.sqrt())
            + (4.0 * c * a - b * b) * (log_num / log_den).abs().ln())
            / (8.0 * a32);

        if len.is_finite() && len > 0.0 {
            len
        } else {
            self.chord()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, QuadBez};

    #[test]
    fn eval_blend() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        assert_eq!(q.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(q.eval(1.0), Point::new(2.0, 0.0));
        assert_eq!(q.eval(0.5), Point::new(1.0, 1.0));
    }

    #[test]
    fn eval_extrapolates() {
        // Control at the midpoint makes the parametrization linear, so values
        // outside [0, 1] continue the straight line.
        let q = QuadBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));
        assert_eq!(q.eval(1.5), Point::new(3.0, 0.0));
        assert_eq!(q.eval(-0.5), Point::new(-1.0, 0.0));
    }

    #[test]
    fn arclen_analytic() {
        // For this curve the true length is ½√5 + ¼ ln(2 + √5).
        let q = QuadBez::new((0.0, 0.0), (0.0, 0.5), (1.0, 1.0));
        let truth = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        assert!((q.arclen() - truth).abs() < 1e-12, "closed form is exact");
    }

    #[test]
    fn arclen_degenerate_is_chord() {
        let q = QuadBez::new((0.0, 0.0), (1.5, 1.5), (3.0, 3.0));
        let chord = 18.0f64.sqrt();
        assert!((q.arclen() - chord).abs() < 1e-12, "straight run falls back");
    }

    #[test]
    fn arclen_bounds() {
        // Arc length always sits between the chord and the control polygon.
        let q = QuadBez::new((0.0, 0.0), (2.0, 3.0), (4.0, 0.0));
        let len = q.arclen();
        let chord = q.chord();
        let polygon = q.p0.distance(q.p1) + q.p1.distance(q.p2);
        assert!(len > chord, "longer than the chord");
        assert!(len < polygon, "shorter than the control polygon");
    }
}
