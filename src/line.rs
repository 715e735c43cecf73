// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directed line segments and line equations.

use crate::common::round_to;
use crate::{Point, Vec2};

/// A directed line segment from `p0` to `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// The segment's start point.
    pub p0: Point,
    /// The segment's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The vector from `p0` to `p1`.
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The segment's length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().hypot()
    }

    /// The segment's midpoint.
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The equation of the infinite line this segment lies on.
    ///
    /// Returns `None` when the endpoints coincide, in which case no line is
    /// defined.
    #[inline]
    pub fn eq(&self) -> Option<LineEq> {
        LineEq::through(self.p0, self.p1)
    }
}

/// The equation of an infinite line in the plane.
///
/// A vertical line cannot be written as y = grad·x + cnst, so it gets its own
/// variant rather than a null gradient; no arithmetic here ever divides by an
/// implicit zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineEq {
    /// y = grad·x + cnst.
    Sloped {
        /// The line's gradient.
        grad: f64,
        /// The line's y-intercept.
        cnst: f64,
    },
    /// x = constant.
    Vertical {
        /// The line's fixed x coordinate.
        x: f64,
    },
}

/// The result of solving two line equations against each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// The lines cross at a single point.
    At(Point),
    /// The two equations describe the same line.
    Coincident,
    /// The lines are parallel and never meet.
    Parallel,
}

impl LineEq {
    /// The equation of the line through two points.
    ///
    /// Returns `None` when the points coincide.
    pub fn through(p0: Point, p1: Point) -> Option<LineEq> {
        if p0.x == p1.x {
            if p0.y == p1.y {
                return None;
            }
            return Some(LineEq::Vertical { x: p0.x });
        }
        let grad = (p1.y - p0.y) / (p1.x - p0.x);
        Some(LineEq::Sloped {
            grad,
            cnst: p0.y - grad * p0.x,
        })
    }

    /// The y value at `x`, or `None` for a vertical line.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            LineEq::Sloped { grad, cnst } => Some(grad * x + cnst),
            LineEq::Vertical { .. } => None,
        }
    }

    /// The x value at `y`, or `None` for a horizontal line.
    #[inline]
    pub fn x_at(&self, y: f64) -> Option<f64> {
        match *self {
            LineEq::Sloped { grad, cnst } => {
                if grad == 0.0 {
                    None
                } else {
                    Some((y - cnst) / grad)
                }
            }
            LineEq::Vertical { x } => Some(x),
        }
    }

    /// The perpendicular line through `p`.
    ///
    /// The gradient maps to its negative reciprocal; horizontal and vertical
    /// lines swap into each other.
    pub fn perp_through(&self, p: Point) -> LineEq {
        match *self {
            LineEq::Sloped { grad, .. } => {
                if grad == 0.0 {
                    LineEq::Vertical { x: p.x }
                } else {
                    let inv = -grad.recip();
                    LineEq::Sloped {
                        grad: inv,
                        cnst: p.y - inv * p.x,
                    }
                }
            }
            LineEq::Vertical { .. } => LineEq::Sloped {
                grad: 0.0,
                cnst: p.y,
            },
        }
    }

    /// The same slope re-anchored so the line passes through `p`.
    pub fn translate_to(&self, p: Point) -> LineEq {
        match *self {
            LineEq::Sloped { grad, .. } => LineEq::Sloped {
                grad,
                cnst: p.y - grad * p.x,
            },
            LineEq::Vertical { .. } => LineEq::Vertical { x: p.x },
        }
    }

    /// Whether the two lines have the same direction.
    ///
    /// Coincident lines count as parallel.
    #[inline]
    pub fn is_parallel(&self, other: &LineEq) -> bool {
        match (*self, *other) {
            (LineEq::Sloped { grad: g1, .. }, LineEq::Sloped { grad: g2, .. }) => g1 == g2,
            (LineEq::Vertical { .. }, LineEq::Vertical { .. }) => true,
            _ => false,
        }
    }

    /// Whether the line passes through `p`, compared at `places` decimal
    /// places.
    ///
    /// Both the y-at-x and x-at-y forms are tried so that steep lines do not
    /// lose the comparison to float noise.
    pub fn passes_through(&self, p: Point, places: u32) -> bool {
        match *self {
            LineEq::Vertical { x } => round_to(x, places) == round_to(p.x, places),
            LineEq::Sloped { grad, cnst } => {
                if round_to(grad * p.x + cnst, places) == round_to(p.y, places) {
                    return true;
                }
                grad != 0.0 && round_to((p.y - cnst) / grad, places) == round_to(p.x, places)
            }
        }
    }

    /// Round the equation's coefficients to `places` decimal places.
    #[inline]
    pub fn rounded(self, places: u32) -> LineEq {
        match self {
            LineEq::Sloped { grad, cnst } => LineEq::Sloped {
                grad: round_to(grad, places),
                cnst: round_to(cnst, places),
            },
            LineEq::Vertical { x } => LineEq::Vertical {
                x: round_to(x, places),
            },
        }
    }

    /// Solve this equation against `other`.
    ///
    /// Branches on which side (if either) is vertical or horizontal so the
    /// general 2×2 solution never divides by zero.
    pub fn intersect(&self, other: &LineEq) -> Intersection {
        match (*self, *other) {
            (LineEq::Vertical { x: x1 }, LineEq::Vertical { x: x2 }) => {
                if x1 == x2 {
                    Intersection::Coincident
                } else {
                    Intersection::Parallel
                }
            }
            (LineEq::Vertical { x }, LineEq::Sloped { grad, cnst })
            | (LineEq::Sloped { grad, cnst }, LineEq::Vertical { x }) => {
                Intersection::At(Point::new(x, grad * x + cnst))
            }
            (
                LineEq::Sloped {
                    grad: g1,
                    cnst: c1,
                },
                LineEq::Sloped {
                    grad: g2,
                    cnst: c2,
                },
            ) => {
                if g1 == g2 {
                    if c1 == c2 {
                        Intersection::Coincident
                    } else {
                        Intersection::Parallel
                    }
                } else if g1 == 0.0 {
                    // Self is horizontal: y is fixed, read x off the other.
                    Intersection::At(Point::new((c1 - c2) / g2, c1))
                } else if g2 == 0.0 {
                    Intersection::At(Point::new((c2 - c1) / g1, c2))
                } else {
                    let x = (c2 - c1) / (g1 - g2);
                    Intersection::At(Point::new(x, g1 * x + c1))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Intersection, Line, LineEq, Point};

    #[test]
    fn through_points() {
        let eq = LineEq::through(Point::new(0.0, 1.0), Point::new(2.0, 5.0)).unwrap();
        assert_eq!(
            eq,
            LineEq::Sloped {
                grad: 2.0,
                cnst: 1.0
            }
        );
        let eq = LineEq::through(Point::new(3.0, 1.0), Point::new(3.0, 5.0)).unwrap();
        assert_eq!(eq, LineEq::Vertical { x: 3.0 });
        assert!(LineEq::through(Point::new(3.0, 1.0), Point::new(3.0, 1.0)).is_none());
    }

    #[test]
    fn perpendicular() {
        let eq = LineEq::Sloped {
            grad: 2.0,
            cnst: 0.0,
        };
        let perp = eq.perp_through(Point::new(2.0, 1.0));
        assert_eq!(
            perp,
            LineEq::Sloped {
                grad: -0.5,
                cnst: 2.0
            }
        );

        // Horizontal becomes vertical and back.
        let horiz = LineEq::Sloped {
            grad: 0.0,
            cnst: 4.0,
        };
        assert_eq!(
            horiz.perp_through(Point::new(7.0, 0.0)),
            LineEq::Vertical { x: 7.0 }
        );
        let vert = LineEq::Vertical { x: 2.0 };
        assert_eq!(
            vert.perp_through(Point::new(0.0, 3.0)),
            LineEq::Sloped {
                grad: 0.0,
                cnst: 3.0
            }
        );
    }

    #[test]
    fn intersections() {
        let a = LineEq::Sloped {
            grad: 1.0,
            cnst: 0.0,
        };
        let b = LineEq::Sloped {
            grad: -1.0,
            cnst: 2.0,
        };
        assert_eq!(a.intersect(&b), Intersection::At(Point::new(1.0, 1.0)));

        // One vertical side.
        let v = LineEq::Vertical { x: 3.0 };
        assert_eq!(a.intersect(&v), Intersection::At(Point::new(3.0, 3.0)));
        assert_eq!(v.intersect(&a), Intersection::At(Point::new(3.0, 3.0)));

        // One horizontal side.
        let h = LineEq::Sloped {
            grad: 0.0,
            cnst: 2.0,
        };
        assert_eq!(h.intersect(&a), Intersection::At(Point::new(2.0, 2.0)));

        // Parallel and coincident taxonomy.
        let shifted = LineEq::Sloped {
            grad: 1.0,
            cnst: 1.0,
        };
        assert_eq!(a.intersect(&shifted), Intersection::Parallel);
        assert_eq!(a.intersect(&a), Intersection::Coincident);
        assert_eq!(
            LineEq::Vertical { x: 1.0 }.intersect(&LineEq::Vertical { x: 2.0 }),
            Intersection::Parallel
        );
        assert_eq!(
            LineEq::Vertical { x: 1.0 }.intersect(&LineEq::Vertical { x: 1.0 }),
            Intersection::Coincident
        );
    }

    #[test]
    fn containment() {
        let eq = LineEq::Sloped {
            grad: 3.0,
            cnst: -1.0,
        };
        assert!(eq.passes_through(Point::new(1.0, 2.0), 6));
        assert!(!eq.passes_through(Point::new(1.0, 2.1), 6));
        let v = LineEq::Vertical { x: 1.5 };
        assert!(v.passes_through(Point::new(1.5, -20.0), 6));
        assert!(!v.passes_through(Point::new(1.6, 0.0), 6));
    }

    #[test]
    fn segment_helpers() {
        let line = Line::new((0.0, 0.0), (4.0, 3.0));
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.midpoint(), Point::new(2.0, 1.5));
        assert_eq!(line.vector(), crate::Vec2::new(4.0, 3.0));
    }

    #[test]
    fn translate() {
        let eq = LineEq::Sloped {
            grad: 2.0,
            cnst: 0.0,
        };
        assert_eq!(
            eq.translate_to(Point::new(1.0, 0.0)),
            LineEq::Sloped {
                grad: 2.0,
                cnst: -2.0
            }
        );
        let v = LineEq::Vertical { x: 0.0 };
        assert_eq!(
            v.translate_to(Point::new(5.0, 1.0)),
            LineEq::Vertical { x: 5.0 }
        );
    }
}
