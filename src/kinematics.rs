// Copyright 2026 the Glisado Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform-acceleration kinematics.
//!
//! The motion model along every segment is the closed-form constant
//! acceleration one: d = v₀·t + ½at². These helpers derive the acceleration
//! that covers a distance in a duration, the speed reached after a duration,
//! and the time taken to cover a distance (the inverse problem used by the
//! sampler to attach a speed to each emitted point).

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;

/// The constant acceleration that covers `distance` in `duration` starting at
/// speed `v0`.
///
/// `duration` must be non-zero; path construction validates that marker times
/// are strictly increasing before this is ever reached.
#[inline]
pub fn acceleration(v0: f64, distance: f64, duration: f64) -> f64 {
    debug_assert!(duration != 0.0, "zero duration has no acceleration");
    2.0 * (distance - v0 * duration) / (duration * duration)
}

/// The speed reached after accelerating at `accel` for `duration` starting at
/// speed `v0`.
#[inline]
pub fn final_speed(v0: f64, accel: f64, duration: f64) -> f64 {
    v0 + accel * duration
}

/// The positive solutions of d = v₀·t + ½at² for `t`, in ascending order.
///
/// With zero acceleration the relation is linear and at most one positive
/// solution exists. Two positive solutions arise only under deceleration,
/// when the motion crosses the distance, reverses, and crosses it again; the
/// first element is then the physically first-reached time.
pub fn travel_times(v0: f64, accel: f64, distance: f64) -> ArrayVec<f64, 2> {
    if accel == 0.0 {
        let mut result = ArrayVec::new();
        let t = distance / v0;
        if t.is_finite() && t > 0.0 {
            result.push(t);
        }
        return result;
    }
    solve_quadratic(-distance, v0, 0.5 * accel)
        .into_iter()
        .filter(|t| *t > 0.0)
        .collect()
}

/// The earliest positive time at which the motion has covered `distance`.
///
/// `None` when the motion never reaches the distance (for example
/// decelerating to a stop short of it).
#[inline]
pub fn travel_time(v0: f64, accel: f64, distance: f64) -> Option<f64> {
    travel_times(v0, accel, distance).first().copied()
}

#[cfg(test)]
mod tests {
    use super::{acceleration, final_speed, travel_time, travel_times};

    #[test]
    fn acceleration_round_trip() {
        // From rest, 8 units in 2 seconds needs a = 4.
        let a = acceleration(0.0, 8.0, 2.0);
        assert_eq!(a, 4.0);
        assert_eq!(final_speed(0.0, a, 2.0), 8.0);

        // Uniform motion needs no acceleration.
        assert_eq!(acceleration(3.0, 6.0, 2.0), 0.0);
    }

    #[test]
    fn inverse_uniform() {
        assert_eq!(travel_time(2.0, 0.0, 5.0), Some(2.5));
        assert_eq!(travel_time(0.0, 0.0, 5.0), None);
    }

    #[test]
    fn inverse_accelerating() {
        // d = ½·4·t² from rest: 8 units at t = 2.
        let t = travel_time(0.0, 4.0, 8.0).unwrap();
        assert!((t - 2.0).abs() < 1e-12, "single positive root");
    }

    #[test]
    fn inverse_decelerating_picks_first_crossing() {
        // v0 = 4, a = -2: position peaks at 4 after 2s, crossing d = 3 at
        // t = 1 and again (moving backwards) at t = 3.
        let times = travel_times(4.0, -2.0, 3.0);
        assert_eq!(times.len(), 2, "two crossings under deceleration");
        assert!((times[0] - 1.0).abs() < 1e-12);
        assert!((times[1] - 3.0).abs() < 1e-12);
        assert!((travel_time(4.0, -2.0, 3.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_unreachable() {
        // v0 = 2, a = -2: the motion stops after covering 1 unit.
        assert_eq!(travel_time(2.0, -2.0, 3.0), None);
    }
}
