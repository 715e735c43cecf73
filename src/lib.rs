// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothly accelerated 2D motion paths through waypoint markers.
//!
//! Given an ordered sequence of [`Waypoint`]s — each optionally carrying an
//! absolute time — this crate constructs a tangent-continuous chain of
//! quadratic Bézier segments through them, attaches a constant-acceleration
//! speed profile, and samples the result at fixed arc-length intervals. The
//! output is a dense, ordered list of coordinates annotated with
//! instantaneous speed, ready to drive an object's position frame by frame.
//!
//! The construction handles the awkward cases a naive spline does not:
//! markers lying on a straight run collapse to exact line segments, and a
//! curvature reversal between two markers splits the segment at its midpoint
//! so each half can bend its own way. Whatever fraction of a sampling step is
//! left at the end of one segment carries into the next, so point spacing
//! stays uniform across marker boundaries.
//!
//! Rendering, frame scheduling, and input capture are out of scope: this is
//! an in-process library that turns markers into a finished, immutable
//! [`MotionPath`].
//!
//! # Example
//!
//! ```
//! use glisado::{MotionPath, PathConfig, Point, Waypoint};
//!
//! let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(4.0, 0.0)];
//! let config = PathConfig::new(1.0).with_initial_speed(2.0);
//! let path = MotionPath::build(&waypoints, &config)?;
//!
//! let points = path.points();
//! assert_eq!(points.first().unwrap().pos, Point::new(0.0, 0.0));
//! assert_eq!(points.last().unwrap().pos, Point::new(4.0, 0.0));
//! assert!(points.iter().all(|p| p.speed == 2.0));
//! # Ok::<(), glisado::PathError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]

pub mod common;
mod error;
pub mod kinematics;
mod line;
mod path;
mod point;
mod quadbez;
mod sampler;
mod tangent;
mod vec2;

pub use crate::error::PathError;
pub use crate::line::{Intersection, Line, LineEq};
pub use crate::path::{
    Marker, MotionPath, PathConfig, PathPoint, Waypoint, DEFAULT_PRECISION,
};
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::vec2::Vec2;
