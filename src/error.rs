// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by path construction.

use thiserror::Error;

/// Everything that can go wrong while building a motion path.
///
/// Every variant aborts the whole build at the point of first algebraic
/// impossibility; no partial path is ever returned. Numerical edge conditions
/// (zero acceleration, a degenerate arc-length denominator) are not errors:
/// they fall back to uniform speed or straight-line geometry instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The input geometry collapses: fewer than two waypoints, identical
    /// consecutive waypoints, or a tangent construction whose defining points
    /// coincide.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// Two tangent equations that must intersect are exactly parallel. This
    /// signals ill-conditioned turn geometry (for example three nearly
    /// collinear markers squeezing the control point to infinity) and is
    /// surfaced rather than silently recovered.
    #[error("tangent equations are parallel and do not intersect")]
    ParallelLines,

    /// The configuration or marker annotations are inconsistent.
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),
}
