// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed arc-length sampling of segment curves.
//!
//! The sampler walks each segment's quadratic curve emitting points spaced a
//! target arc length apart. A parametric step is estimated from the segment
//! length, then corrected once per point by the ratio of the desired step to
//! the actual chord just measured. The residual error of that single
//! correction is accepted; whatever fraction of a step is left when a segment
//! runs out is carried into the next segment so global spacing stays uniform
//! across marker boundaries.

use crate::common::round_to;
use crate::kinematics;
use crate::path::PathPoint;
use crate::quadbez::QuadBez;

/// How many decimal places the parametric bookkeeping keeps.
const PARAM_PLACES: u32 = 8;

/// One fully resolved segment, ready for sampling.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    /// The segment's curve; `curve.p0` is the owning marker.
    pub(crate) curve: QuadBez,
    /// Arc length of the curve.
    pub(crate) length: f64,
    /// Constant acceleration along the segment.
    pub(crate) accel: f64,
    /// Speed at the segment's start marker.
    pub(crate) start_speed: f64,
}

/// Walks segment curves, emitting arc-length-spaced, speed-annotated points.
#[derive(Debug)]
pub(crate) struct Sampler {
    step: f64,
    places: u32,
    /// Arc length still owed to the step that straddles the previous segment
    /// boundary; zero when the previous segment ended exactly on a point.
    carry_len: f64,
    /// Fractional overshoot of the previous segment's final parameter value,
    /// used only as the initial guess for the straddling point.
    carry_frac: f64,
    points: Vec<PathPoint>,
}

impl Sampler {
    pub(crate) fn new(step: f64, places: u32) -> Sampler {
        Sampler {
            step,
            places,
            carry_len: 0.0,
            carry_frac: 0.0,
            points: Vec::new(),
        }
    }

    pub(crate) fn into_points(self) -> Vec<PathPoint> {
        self.points
    }

    /// Emit this segment's points.
    pub(crate) fn sample(&mut self, seg: &Segment) {
        let t_step = round_to(self.step / seg.length, PARAM_PLACES);
        let start = seg.curve.p0;

        let (mut prev_t, mut prev_pos, mut prev_speed) = if self.carry_len > 0.0 {
            // The first point straddles the boundary: it completes the step
            // left unfinished by the previous segment, so it sits carry_len
            // into this curve rather than on the start marker.
            let guess = t_step * self.carry_frac;
            let probe = seg.curve.eval(guess);
            let t = guess * (self.carry_len / start.distance(probe));
            if t > 1.0 {
                // The whole segment is shorter than what the pending step
                // still needs; consume it and move on without emitting.
                self.carry_len = (self.carry_len - start.distance(seg.curve.p2)).max(0.0);
                self.carry_frac = self.carry_len / self.step;
                return;
            }
            let pos = seg.curve.eval(t).rounded(self.places);
            let speed = step_speed(seg, seg.start_speed, start.distance(pos));
            self.points.push(PathPoint::new(pos, speed));
            (t, pos, speed)
        } else {
            // Clean boundary: the start marker itself is the first point.
            self.points.push(PathPoint::new(start, seg.start_speed));
            (0.0, start, seg.start_speed)
        };

        let mut t = prev_t + t_step;
        while t <= 1.0 + t_step {
            let probe = seg.curve.eval(t);
            let chord = prev_pos.distance(probe);
            // One correction toward the desired arc step; the residual error
            // is absorbed by the carry at the segment boundary.
            t = prev_t + (t - prev_t) * (self.step / chord);
            if t <= 1.0 {
                let pos = seg.curve.eval(t).rounded(self.places);
                let speed = step_speed(seg, prev_speed, prev_pos.distance(pos));
                self.points.push(PathPoint::new(pos, speed));
                prev_t = t;
                prev_pos = pos;
                prev_speed = speed;
            } else {
                let tail = prev_pos.distance(seg.curve.p2);
                self.carry_len = self.step - tail;
            }
            t += t_step;
        }
        self.carry_frac = round_to((t - 1.0) / t_step, PARAM_PLACES);
    }
}

/// The speed at the end of one sampling micro-step of chord length `chord`,
/// starting from speed `from`.
fn step_speed(seg: &Segment, from: f64, chord: f64) -> f64 {
    if seg.accel == 0.0 {
        // Uniform motion along the whole segment.
        return seg.start_speed;
    }
    match kinematics::travel_time(from, seg.accel, chord) {
        Some(dt) => kinematics::final_speed(from, seg.accel, dt),
        None => from,
    }
}
