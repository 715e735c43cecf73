// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations.

use arrayvec::ArrayVec;

/// Round `value` to `places` decimal places.
///
/// Coordinates and line-equation coefficients are rounded on construction so
/// that the equality comparisons driving the path builder's branches are not
/// upset by float noise.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Find real roots of the quadratic equation c0 + c1·x + c2·x² = 0.
///
/// Returns the roots in ascending order. If the equation is nearly linear,
/// the quadratic term is ignored and the single linear root is returned; in
/// the fully degenerate case where every x satisfies the equation, a single
/// `0.0` is returned.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 / c2;
    let sc1 = c1 / c2;
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear.
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4.0 * sc0;
    if !arg.is_finite() {
        // sc1 * sc1 overflowed; the surviving root comes from sc1·x + x² = 0.
        result.push(-sc1);
        return result;
    }
    if arg < 0.0 {
        return result;
    }
    if arg == 0.0 {
        result.push(-0.5 * sc1);
        return result;
    }
    // Avoids cancellation in the classic formula; see
    // https://math.stackexchange.com/questions/866331
    let root1 = -0.5 * (sc1 + arg.sqrt().copysign(sc1));
    let root2 = sc0 / root1;
    if root2.is_finite() {
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{round_to, solve_quadratic};

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.0000004, 6), 1.0);
        assert_eq!(round_to(1.0000006, 6), 1.000001);
        assert_eq!(round_to(-2.3333333333, 6), -2.333333);
        assert_eq!(round_to(7.25, 6), 7.25);
    }

    #[test]
    fn quadratic_roots() {
        let epsilon = 1e-12;
        let roots = solve_quadratic(-6.0, 1.0, 1.0);
        assert_eq!(roots.len(), 2, "x² + x − 6 has two roots");
        assert!((roots[0] + 3.0).abs() < epsilon);
        assert!((roots[1] - 2.0).abs() < epsilon);

        // Double root.
        let roots = solve_quadratic(1.0, 2.0, 1.0);
        assert_eq!(roots.len(), 1, "(x + 1)² has one distinct root");
        assert!((roots[0] + 1.0).abs() < epsilon);

        // No real roots.
        assert!(solve_quadratic(5.0, 0.0, 1.0).is_empty(), "x² + 5 has none");

        // Linear degenerate.
        let roots = solve_quadratic(5.0, 1.0, 0.0);
        assert_eq!(roots.len(), 1, "linear case has one root");
        assert!((roots[0] + 5.0).abs() < epsilon);
    }
}
