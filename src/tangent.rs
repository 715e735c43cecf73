// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tangent and turn-direction resolution at markers.
//!
//! Every marker needs a tangent equation before its neighboring curves can be
//! built: the curve control points are tangent intersections. Interior
//! markers between two angled chords get the turn bisector; markers on a
//! straight run inherit or mirror the incoming tangent; path endpoints get
//! the perpendicular of their single adjacent chord at its midpoint.

use crate::error::PathError;
use crate::line::{Intersection, Line, LineEq};
use crate::{Point, Vec2};

/// Damping applied to the mirrored tangent when an angled tangent enters a
/// straight run; pulls the mirror anchor toward the chord midpoint so the
/// rejoining curve stays close to the run.
pub(crate) const STRAIGHT_RUN_DAMPING: f64 = 1.2;

/// Turn direction between two consecutive chord vectors.
///
/// `Some(true)` for a clockwise turn (negative cross product), `Some(false)`
/// for counter-clockwise, `None` when the vectors are collinear and no turn
/// is defined. Only disagreement between consecutive markers matters to the
/// builder, so the handedness label itself is a convention.
pub(crate) fn turn_direction(v1: Vec2, v2: Vec2) -> Option<bool> {
    let cross = v1.cross(v2);
    if cross == 0.0 {
        None
    } else {
        Some(cross < 0.0)
    }
}

/// Tangent at the shared marker of two chords meeting at an angle.
///
/// `first.p1` must equal `second.p0`. The tangent runs through the marker and
/// the midpoint of one unit step past the marker along each chord's
/// direction, bisecting the turn.
pub(crate) fn bisector_tangent(
    first: &Line,
    second: &Line,
    places: u32,
) -> Result<LineEq, PathError> {
    let corner = first.p1;
    let ahead = corner + first.vector().normalize();
    let outgoing = corner + second.vector().normalize();
    let mid = ahead.midpoint(outgoing);
    LineEq::through(corner, mid)
        .map(|eq| eq.rounded(places))
        .ok_or(PathError::DegenerateInput(
            "chords double back exactly at marker",
        ))
}

/// Endpoint tangent: the perpendicular to the path's first (or last) chord,
/// erected at that chord's midpoint.
pub(crate) fn endpoint_tangent(chord: &Line, places: u32) -> Result<LineEq, PathError> {
    let eq = chord
        .eq()
        .ok_or(PathError::DegenerateInput("zero-length end segment"))?;
    Ok(eq.perp_through(chord.midpoint()).rounded(places))
}

/// Tangent for the far marker of a straight run entered at an angle: the
/// incoming tangent mirrored across the run, damped toward the chord
/// midpoint, re-anchored through the run's far marker.
pub(crate) fn mirror_tangent(
    chord: &Line,
    incoming: &LineEq,
    places: u32,
) -> Result<LineEq, PathError> {
    let mid = chord.midpoint();
    let perp = chord
        .eq()
        .ok_or(PathError::DegenerateInput("zero-length straight run"))?
        .perp_through(mid);
    let anchor = match incoming.intersect(&perp) {
        Intersection::At(p) => mid + (p - mid) / STRAIGHT_RUN_DAMPING,
        Intersection::Coincident => mid,
        Intersection::Parallel => return Err(PathError::ParallelLines),
    };
    LineEq::through(anchor, chord.p1)
        .map(|eq| eq.rounded(places))
        .ok_or(PathError::DegenerateInput(
            "mirrored tangent collapsed onto marker",
        ))
}

/// Tangent for a marker synthesized at `split_at` (the chord midpoint) when
/// the turn direction reverses across a segment.
///
/// Each half-chord contributes the intersection of its
/// perpendicular-at-midpoint with the tangent of its outer marker; the line
/// through those two intersections, re-anchored through the split point, is
/// the new tangent.
pub(crate) fn split_tangent(
    chord: &Line,
    start_tangent: &LineEq,
    end_tangent: &LineEq,
    split_at: Point,
    places: u32,
) -> Result<LineEq, PathError> {
    let chord_eq = chord
        .eq()
        .ok_or(PathError::DegenerateInput("zero-length reversal segment"))?;
    let first_mid = chord.p0.midpoint(split_at);
    let second_mid = split_at.midpoint(chord.p1);
    let first = anchor_on(start_tangent, &chord_eq.perp_through(first_mid), first_mid)?;
    let second = anchor_on(end_tangent, &chord_eq.perp_through(second_mid), second_mid)?;
    let eq = LineEq::through(first, second).ok_or(PathError::DegenerateInput(
        "reversal tangent collapsed to a point",
    ))?;
    Ok(eq.translate_to(split_at).rounded(places))
}

/// Where `tangent` meets `perp`; coincident lines fall back to the
/// perpendicular's own anchor point.
fn anchor_on(tangent: &LineEq, perp: &LineEq, fallback: Point) -> Result<Point, PathError> {
    match tangent.intersect(perp) {
        Intersection::At(p) => Ok(p),
        Intersection::Coincident => Ok(fallback),
        Intersection::Parallel => Err(PathError::ParallelLines),
    }
}
