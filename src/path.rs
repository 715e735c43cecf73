// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path construction: waypoints in, sampled motion path out.
//!
//! [`MotionPath::build`] is the crate's entry point. It walks the waypoint
//! sequence pairwise, resolves a tangent equation at every marker, splits
//! segments whose curvature direction reverses, derives each segment's curve
//! from the tangent intersections, attaches a constant-acceleration speed
//! profile, and samples everything into one dense coordinate list.

use smallvec::SmallVec;

use crate::common::round_to;
use crate::error::PathError;
use crate::kinematics;
use crate::line::{Intersection, Line, LineEq};
use crate::sampler::{Sampler, Segment};
use crate::tangent;
use crate::{Point, QuadBez};

/// Decimal places used for coordinate rounding when none are configured.
pub const DEFAULT_PRECISION: u32 = 6;

/// Speed assigned when neither marker times nor an initial speed are given.
const DEFAULT_UNIFORM_SPEED: f64 = 1.0;

/// A caller-supplied marker the path must pass through.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// The marker's position.
    pub pos: Point,
    /// The absolute time at which the marker is reached. Either every
    /// waypoint of a path carries a time or none does.
    pub time: Option<f64>,
}

impl Waypoint {
    /// A waypoint with no time annotation.
    #[inline]
    pub fn new(x: f64, y: f64) -> Waypoint {
        Waypoint {
            pos: Point::new(x, y),
            time: None,
        }
    }

    /// A waypoint reached at absolute time `t`.
    #[inline]
    pub fn timed(x: f64, y: f64, t: f64) -> Waypoint {
        Waypoint {
            pos: Point::new(x, y),
            time: Some(t),
        }
    }
}

impl From<Point> for Waypoint {
    #[inline]
    fn from(pos: Point) -> Waypoint {
        Waypoint { pos, time: None }
    }
}

/// One sampled point of the finished path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    /// The point's position.
    pub pos: Point,
    /// Instantaneous speed at this point.
    pub speed: f64,
}

impl PathPoint {
    /// Create a new path point.
    #[inline]
    pub fn new(pos: Point, speed: f64) -> PathPoint {
        PathPoint { pos, speed }
    }
}

/// A marker with the annotations accumulated while the path was built.
///
/// Markers are records owned by the builder; the caller's [`Waypoint`]s are
/// never touched. The finished list is exposed read-only because it tells the
/// path's story: which markers sit on straight runs, where the curvature
/// reverses, and what was inserted to handle it.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    /// The marker's position (rounded to the configured precision).
    pub pos: Point,
    /// The absolute time at which the marker is reached, if times are in use.
    /// Synthesized markers get a time derived from the segment kinematics.
    pub time: Option<f64>,
    /// Speed at this marker.
    pub speed: f64,
    /// The tangent equation of the path through this marker.
    pub tangent: Option<LineEq>,
    /// Turn direction at this marker relative to its neighboring segments;
    /// `None` while unresolved or when the segments are collinear.
    pub clockwise: Option<bool>,
    /// Whether this marker sits on a straight run or at a curvature reversal.
    pub dir_switch: bool,
    /// Whether this marker was synthesized at a curvature reversal rather
    /// than supplied by the caller.
    pub synthetic: bool,
}

impl Marker {
    fn from_waypoint(w: &Waypoint, places: u32) -> Marker {
        Marker {
            pos: w.pos.rounded(places),
            time: w.time.map(|t| round_to(t, places)),
            speed: 0.0,
            tangent: None,
            clockwise: None,
            dir_switch: false,
            synthetic: false,
        }
    }
}

/// Configuration for [`MotionPath::build`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    /// Target arc-length spacing between consecutive output points. Must be
    /// positive; values larger than a segment degrade to roughly one point
    /// per segment.
    pub step: f64,
    /// Decimal places for coordinate and coefficient rounding.
    pub precision: u32,
    /// Speed at the first marker. Without it, timed paths start their first
    /// segment at uniform speed and untimed paths run at unit speed
    /// throughout.
    pub initial_speed: Option<f64>,
}

impl PathConfig {
    /// A configuration with the given step, default precision and no initial
    /// speed.
    #[inline]
    pub fn new(step: f64) -> PathConfig {
        PathConfig {
            step,
            precision: DEFAULT_PRECISION,
            initial_speed: None,
        }
    }

    /// Builder-style precision override.
    #[inline]
    pub fn with_precision(mut self, places: u32) -> PathConfig {
        self.precision = places;
        self
    }

    /// Builder-style initial speed.
    #[inline]
    pub fn with_initial_speed(mut self, speed: f64) -> PathConfig {
        self.initial_speed = Some(speed);
        self
    }
}

/// A finished, immutable motion path.
#[derive(Clone, Debug)]
pub struct MotionPath {
    points: Vec<PathPoint>,
    markers: Vec<Marker>,
}

impl MotionPath {
    /// Build a path through `waypoints`.
    ///
    /// The first and last output points equal the first and last waypoints;
    /// interior points are spaced `config.step` apart in arc length (within
    /// the sampler's single-correction tolerance), with fractional remainders
    /// carried across segment boundaries.
    ///
    /// # Errors
    ///
    /// See [`PathError`] for the taxonomy. Any error aborts the whole build.
    pub fn build(waypoints: &[Waypoint], config: &PathConfig) -> Result<MotionPath, PathError> {
        Builder::new(waypoints, config)?.run()
    }

    /// The sampled points, in travel order.
    #[inline]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// The final annotated markers, including any synthesized at curvature
    /// reversals.
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

struct Builder<'a> {
    cfg: &'a PathConfig,
    timed: bool,
    markers: SmallVec<[Marker; 8]>,
    sampler: Sampler,
}

impl<'a> Builder<'a> {
    fn new(waypoints: &[Waypoint], cfg: &'a PathConfig) -> Result<Builder<'a>, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::DegenerateInput(
                "a path needs at least two waypoints",
            ));
        }
        if !(cfg.step > 0.0) {
            return Err(PathError::Configuration("step length must be positive"));
        }
        if let Some(speed) = cfg.initial_speed {
            if !(speed >= 0.0) {
                return Err(PathError::Configuration(
                    "initial speed must be non-negative",
                ));
            }
        }

        let timed = waypoints[0].time.is_some();
        let mut markers: SmallVec<[Marker; 8]> = SmallVec::with_capacity(waypoints.len());
        for w in waypoints {
            if w.time.is_some() != timed {
                return Err(PathError::Configuration(
                    "either every waypoint carries a time or none does",
                ));
            }
            let marker = Marker::from_waypoint(w, cfg.precision);
            if let Some(prev) = markers.last() {
                if prev.pos == marker.pos {
                    return Err(PathError::DegenerateInput(
                        "consecutive waypoints coincide",
                    ));
                }
                if let (Some(t), Some(prev_t)) = (marker.time, prev.time) {
                    if t <= prev_t {
                        return Err(PathError::Configuration(
                            "waypoint times must be strictly increasing",
                        ));
                    }
                }
            }
            markers.push(marker);
        }

        Ok(Builder {
            cfg,
            timed,
            markers,
            sampler: Sampler::new(cfg.step, cfg.precision),
        })
    }

    fn run(mut self) -> Result<MotionPath, PathError> {
        let mut i = 0;
        while i + 1 < self.markers.len() {
            let chord = Line::new(self.markers[i].pos, self.markers[i + 1].pos);

            if i + 2 < self.markers.len() {
                let next = Line::new(self.markers[i + 1].pos, self.markers[i + 2].pos);
                if !self.markers[i + 1].dir_switch {
                    self.resolve_interior(i, &chord, &next)?;
                }
                if self.markers[i].tangent.is_none() {
                    // Path start: perpendicular of the first chord at its
                    // midpoint, turn direction borrowed from the neighbor.
                    self.markers[i].tangent = Some(tangent::endpoint_tangent(&chord, self.cfg.precision)?);
                    self.markers[i].clockwise = self.markers[i + 1].clockwise;
                } else if self.reversal_at(i) {
                    self.insert_split(i, &chord)?;
                    // Reprocess the shortened segment at the same index.
                    continue;
                }
            } else {
                // Path end: same endpoint rule as the start.
                self.markers[i + 1].tangent =
                    Some(tangent::endpoint_tangent(&chord, self.cfg.precision)?);
                self.markers[i + 1].clockwise = self.markers[i].clockwise;
            }

            let segment = self.finish_segment(i, &chord)?;
            self.sampler.sample(&segment);
            i += 1;
        }

        let mut points = self.sampler.into_points();
        if let Some(last) = self.markers.last() {
            // The sampler only emits a marker as the *start* of a segment, so
            // the path's final marker is appended here unless a sample landed
            // on it exactly.
            if points.last().map_or(true, |p| p.pos != last.pos) {
                points.push(PathPoint::new(last.pos, last.speed));
            }
        }
        Ok(MotionPath {
            points,
            markers: self.markers.into_vec(),
        })
    }

    /// Resolve the tangent and turn direction of `markers[i + 1]` from the
    /// chords on either side of it.
    fn resolve_interior(&mut self, i: usize, chord: &Line, next: &Line) -> Result<(), PathError> {
        let places = self.cfg.precision;
        let chord_eq = self.line_eq(chord)?;
        let next_eq = self.line_eq(next)?;

        if chord_eq.is_parallel(&next_eq) {
            // The two chords are collinear: a straight run.
            match self.markers[i].tangent {
                Some(incoming) => {
                    let eq = if incoming.is_parallel(&chord_eq) {
                        // Already running straight; carry the tangent forward.
                        incoming
                    } else {
                        // Entering the run at an angle: mirror across it.
                        tangent::mirror_tangent(chord, &incoming, places)?
                    };
                    self.markers[i + 1].tangent = Some(eq);
                    self.markers[i + 1].dir_switch = true;
                }
                None => {
                    // The path itself starts on a straight run.
                    self.markers[i].tangent = Some(chord_eq);
                    self.markers[i].dir_switch = true;
                    self.markers[i + 1].tangent = Some(chord_eq);
                    self.markers[i + 1].dir_switch = true;
                }
            }
        } else {
            self.markers[i + 1].tangent = Some(tangent::bisector_tangent(chord, next, places)?);
            self.markers[i + 1].clockwise = tangent::turn_direction(chord.vector(), next.vector());
        }
        Ok(())
    }

    /// Whether the curvature direction reverses across segment `i`.
    fn reversal_at(&self, i: usize) -> bool {
        let a = &self.markers[i];
        let b = &self.markers[i + 1];
        !a.dir_switch && !b.dir_switch && a.clockwise != b.clockwise
    }

    /// Synthesize a marker at the midpoint of segment `i` where the turn
    /// direction flips, and splice it into the list.
    fn insert_split(&mut self, i: usize, chord: &Line) -> Result<(), PathError> {
        let places = self.cfg.precision;
        let split_at = chord.midpoint().rounded(places);
        let (Some(start_tng), Some(end_tng)) =
            (self.markers[i].tangent, self.markers[i + 1].tangent)
        else {
            return Err(PathError::DegenerateInput(
                "unresolved tangent at a curvature reversal",
            ));
        };
        let eq = tangent::split_tangent(chord, &start_tng, &end_tng, split_at, places)?;
        let time = if self.timed {
            Some(self.split_time(i, chord)?)
        } else {
            None
        };
        self.markers.insert(
            i + 1,
            Marker {
                pos: split_at,
                time,
                speed: 0.0,
                tangent: Some(eq),
                clockwise: None,
                dir_switch: true,
                synthetic: true,
            },
        );
        Ok(())
    }

    /// The time at which the synthesized split marker is reached: the
    /// acceleration over the whole chord covers half of it after this long.
    fn split_time(&self, i: usize, chord: &Line) -> Result<f64, PathError> {
        let (Some(t0), Some(t1)) = (self.markers[i].time, self.markers[i + 1].time) else {
            return Err(PathError::Configuration(
                "timed path lost a marker time at a reversal",
            ));
        };
        let v0 = self.markers[i].speed;
        let accel = kinematics::acceleration(v0, chord.length(), t1 - t0);
        let half = chord.length() / 2.0;
        let roots = kinematics::travel_times(v0, accel, half);
        let dt = match (roots.first().copied(), roots.get(1).copied()) {
            // Earliest crossing, unless it would overshoot the far marker's
            // own time; then the motion reaches the midpoint on the rebound.
            (Some(r0), Some(r1)) => {
                if t0 + r0 < t1 {
                    r0
                } else {
                    r1
                }
            }
            (Some(r0), None) => r0,
            (None, _) => 0.5 * (t1 - t0),
        };
        Ok(round_to(t0 + dt, self.cfg.precision))
    }

    /// Derive segment `i`'s curve and speed profile.
    fn finish_segment(&mut self, i: usize, chord: &Line) -> Result<Segment, PathError> {
        let places = self.cfg.precision;
        let control = match self.markers[i].tangent {
            // A two-marker path carries no interior direction information;
            // the midpoint control degenerates the curve to the chord.
            None => chord.midpoint(),
            Some(start_tng) => {
                if start_tng.passes_through(self.markers[i + 1].pos, places) {
                    // The tangent already reaches the far marker: the segment
                    // is straight, and the far tangent follows the chord.
                    self.markers[i + 1].tangent = Some(self.line_eq(chord)?);
                    chord.midpoint()
                } else {
                    let Some(end_tng) = self.markers[i + 1].tangent else {
                        return Err(PathError::DegenerateInput(
                            "unresolved tangent at segment end",
                        ));
                    };
                    match start_tng.intersect(&end_tng) {
                        Intersection::At(p) => p,
                        Intersection::Coincident => chord.midpoint(),
                        Intersection::Parallel => return Err(PathError::ParallelLines),
                    }
                }
            }
        };

        let curve = QuadBez::new(self.markers[i].pos, control, self.markers[i + 1].pos);
        let length = curve.arclen();
        let (accel, start_speed) = self.assign_speeds(i, length)?;
        Ok(Segment {
            curve,
            length,
            accel,
            start_speed,
        })
    }

    /// Assign the segment's acceleration and its far marker's speed.
    fn assign_speeds(&mut self, i: usize, length: f64) -> Result<(f64, f64), PathError> {
        if !self.timed {
            // No durations to honor: uniform motion over the whole path.
            let speed = self.cfg.initial_speed.unwrap_or(DEFAULT_UNIFORM_SPEED);
            if i == 0 {
                self.markers[0].speed = speed;
            }
            self.markers[i + 1].speed = speed;
            return Ok((0.0, speed));
        }

        let (Some(t0), Some(t1)) = (self.markers[i].time, self.markers[i + 1].time) else {
            return Err(PathError::Configuration(
                "timed path lost a marker time mid-build",
            ));
        };
        let secs = t1 - t0;
        if secs <= 0.0 {
            return Err(PathError::Configuration(
                "waypoint times must be strictly increasing",
            ));
        }

        let v0 = if i == 0 {
            match self.cfg.initial_speed {
                // No anchor speed: the first segment runs uniformly.
                None => {
                    let speed = length / secs;
                    self.markers[0].speed = speed;
                    self.markers[i + 1].speed = speed;
                    return Ok((0.0, speed));
                }
                Some(speed) => {
                    self.markers[0].speed = speed;
                    speed
                }
            }
        } else {
            self.markers[i].speed
        };

        let accel = kinematics::acceleration(v0, length, secs);
        self.markers[i + 1].speed = kinematics::final_speed(v0, accel, secs);
        Ok((accel, v0))
    }

    fn line_eq(&self, line: &Line) -> Result<LineEq, PathError> {
        line.eq()
            .map(|eq| eq.rounded(self.cfg.precision))
            .ok_or(PathError::DegenerateInput("consecutive markers coincide"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{MotionPath, PathConfig, PathError, Point, Waypoint};

    fn spacings(path: &MotionPath) -> Vec<f64> {
        path.points()
            .windows(2)
            .map(|w| w[0].pos.distance(w[1].pos))
            .collect()
    }

    #[test]
    fn two_markers_untimed_uniform() {
        let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(4.0, 0.0)];
        let config = PathConfig::new(1.0).with_initial_speed(2.0);
        let path = MotionPath::build(&waypoints, &config).unwrap();

        let xs: Vec<f64> = path.points().iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(
            path.points().iter().all(|p| p.speed == 2.0),
            "initial speed with no time data means zero acceleration"
        );
    }

    #[test]
    fn two_markers_timed_constant_speed() {
        // 3 units in 1.5 seconds: speed 2 everywhere, no acceleration.
        let waypoints = [Waypoint::timed(0.0, 0.0, 0.0), Waypoint::timed(3.0, 0.0, 1.5)];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.5)).unwrap();

        assert_eq!(path.points().len(), 7, "six steps of 0.5 plus the start");
        assert_eq!(path.points()[0].pos, Point::new(0.0, 0.0));
        assert_eq!(path.points().last().unwrap().pos, Point::new(3.0, 0.0));
        for p in path.points() {
            assert!((p.speed - 2.0).abs() < 1e-9, "uniform speed length/Δt");
        }
        for d in spacings(&path) {
            assert!((d - 0.5).abs() < 1e-6, "straight spacing is exact");
        }
    }

    #[test]
    fn untimed_without_speed_runs_at_unit_speed() {
        let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(2.0, 1.0)];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.25)).unwrap();
        assert!(path.points().iter().all(|p| p.speed == 1.0));
    }

    #[test]
    fn endpoint_containment() {
        let waypoints = [
            Waypoint::timed(0.0, 0.0, 0.0),
            Waypoint::timed(1.0, 2.0, 1.0),
            Waypoint::timed(3.0, 2.5, 2.0),
            Waypoint::timed(4.0, 0.0, 3.5),
        ];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.1)).unwrap();
        assert_eq!(path.points()[0].pos, Point::new(0.0, 0.0));
        assert_eq!(path.points().last().unwrap().pos, Point::new(4.0, 0.0));
    }

    #[test]
    fn straight_run_collapses_to_the_line() {
        let waypoints = [
            Waypoint::timed(0.0, 0.0, 0.0),
            Waypoint::timed(1.0, 1.0, 1.0),
            Waypoint::timed(2.0, 2.0, 2.0),
        ];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.2)).unwrap();

        for p in path.points() {
            assert!(
                (p.pos.y - p.pos.x).abs() < 1e-9,
                "every sample lies on y = x, got {:?}",
                p.pos
            );
        }
        let markers = path.markers();
        assert_eq!(markers.len(), 3, "no markers synthesized on a straight run");
        assert!(markers[0].dir_switch && markers[1].dir_switch);
        let speed = 2.0f64.sqrt();
        for p in path.points() {
            assert!((p.speed - speed).abs() < 1e-9, "uniform √2 per second");
        }
    }

    #[test]
    fn reversal_inserts_exactly_one_marker() {
        let waypoints = [
            Waypoint::new(0.0, 0.0),
            Waypoint::new(1.0, 1.0),
            Waypoint::new(2.0, 0.0),
            Waypoint::new(3.0, 1.0),
        ];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.2)).unwrap();

        let markers = path.markers();
        assert_eq!(markers.len(), 5, "one marker was inserted");
        let synthesized: Vec<_> = markers.iter().filter(|m| m.synthetic).collect();
        assert_eq!(synthesized.len(), 1, "exactly one synthesized marker");
        assert!(synthesized[0].dir_switch);
        assert_eq!(
            synthesized[0].pos,
            Point::new(1.5, 0.5),
            "split sits at the reversing segment's midpoint"
        );
        assert_eq!(path.points()[0].pos, Point::new(0.0, 0.0));
        assert_eq!(path.points().last().unwrap().pos, Point::new(3.0, 1.0));
    }

    #[test]
    fn timed_reversal_gets_an_interpolated_time() {
        let waypoints = [
            Waypoint::timed(0.0, 0.0, 0.0),
            Waypoint::timed(1.0, 1.0, 1.0),
            Waypoint::timed(2.0, 0.0, 2.0),
            Waypoint::timed(3.0, 1.0, 3.0),
        ];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.2)).unwrap();
        let split = path
            .markers()
            .iter()
            .find(|m| m.synthetic)
            .expect("a zig-zag must split");
        let t = split.time.expect("timed path gives the split a time");
        assert!(t > 1.0 && t < 2.0, "split time within its segment, got {t}");
    }

    #[test]
    fn worked_example_is_smooth_and_evenly_spaced() {
        let waypoints = [
            Waypoint::timed(0.0, 0.0, 0.0),
            Waypoint::timed(1.0, 1.0, 1.0),
            Waypoint::timed(2.0, 0.0, 2.0),
        ];
        let path = MotionPath::build(&waypoints, &PathConfig::new(0.1)).unwrap();
        let points = path.points();

        assert_eq!(points[0].pos, Point::new(0.0, 0.0));
        assert_eq!(points.last().unwrap().pos, Point::new(2.0, 0.0));

        // Spacing stays near the step everywhere but the final remainder.
        let gaps = spacings(&path);
        for d in &gaps[..gaps.len() - 1] {
            assert!(*d < 0.115 && *d > 0.04, "spacing ≈ 0.1, got {d}");
        }
        assert!(*gaps.last().unwrap() <= 0.115, "remainder never exceeds a step");

        // The crest is rounded, not a corner: some sample sits close to the
        // middle marker, and no two consecutive directions disagree sharply.
        assert!(
            points
                .iter()
                .any(|p| p.pos.distance(Point::new(1.0, 1.0)) < 0.12),
            "samples pass near the middle marker"
        );
        for w in points.windows(3) {
            let d1 = (w[1].pos - w[0].pos).normalize();
            let d2 = (w[2].pos - w[1].pos).normalize();
            assert!(
                d1.dot(d2) > 0.7,
                "direction turns gradually, got {:?} -> {:?}",
                d1,
                d2
            );
        }

        // Symmetric geometry and timing: speed is uniform end to end.
        let v0 = points[0].speed;
        for p in points {
            assert!((p.speed - v0).abs() < 1e-9, "symmetric path, uniform speed");
        }
    }

    #[test]
    fn fewer_than_two_waypoints_rejected() {
        let err = MotionPath::build(&[Waypoint::new(0.0, 0.0)], &PathConfig::new(0.1));
        assert!(matches!(err, Err(PathError::DegenerateInput(_))));
    }

    #[test]
    fn duplicate_waypoints_rejected() {
        // Coincidence is judged after rounding.
        let waypoints = [
            Waypoint::new(0.0, 0.0),
            Waypoint::new(1e-9, -1e-9),
        ];
        let err = MotionPath::build(&waypoints, &PathConfig::new(0.1));
        assert!(matches!(err, Err(PathError::DegenerateInput(_))));
    }

    #[test]
    fn mixed_time_annotations_rejected() {
        let waypoints = [Waypoint::timed(0.0, 0.0, 0.0), Waypoint::new(1.0, 0.0)];
        let err = MotionPath::build(&waypoints, &PathConfig::new(0.1));
        assert!(matches!(err, Err(PathError::Configuration(_))));
    }

    #[test]
    fn non_increasing_times_rejected() {
        let waypoints = [Waypoint::timed(0.0, 0.0, 1.0), Waypoint::timed(1.0, 0.0, 1.0)];
        let err = MotionPath::build(&waypoints, &PathConfig::new(0.1));
        assert!(matches!(err, Err(PathError::Configuration(_))));
    }

    #[test]
    fn bad_step_rejected() {
        let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 0.0)];
        for step in [0.0, -1.0, f64::NAN] {
            let err = MotionPath::build(&waypoints, &PathConfig::new(step));
            assert!(matches!(err, Err(PathError::Configuration(_))));
        }
    }

    #[test]
    fn negative_initial_speed_rejected() {
        let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 0.0)];
        let config = PathConfig::new(0.1).with_initial_speed(-1.0);
        let err = MotionPath::build(&waypoints, &config);
        assert!(matches!(err, Err(PathError::Configuration(_))));
    }

    #[test]
    fn input_waypoints_are_not_mutated() {
        let waypoints = [
            Waypoint::new(0.0, 0.0),
            Waypoint::new(1.0, 1.0),
            Waypoint::new(2.0, 0.0),
            Waypoint::new(3.0, 1.0),
        ];
        let before = waypoints;
        let _ = MotionPath::build(&waypoints, &PathConfig::new(0.25)).unwrap();
        assert_eq!(waypoints, before, "markers are builder-owned copies");
    }

    #[test]
    fn rebuilding_gives_identical_output() {
        let waypoints = [
            Waypoint::timed(0.0, 0.0, 0.0),
            Waypoint::timed(2.0, 1.0, 1.0),
            Waypoint::timed(3.0, -1.0, 2.5),
        ];
        let config = PathConfig::new(0.2);
        let a = MotionPath::build(&waypoints, &config).unwrap();
        let b = MotionPath::build(&waypoints, &config).unwrap();
        assert_eq!(a.points(), b.points(), "construction is pure");
    }
}
