use std::f32::consts::TAU;

use crate::math::clamp;

/// Reduces an angle in radians into `[0, 2π)`
#[inline]
pub fn angle_wrap_0_2pi(angle: f32) -> f32 {
    angle_wrap_periodic(angle, 0.0, TAU)
}

/// Reduces an angle into the periodic range `[from, to)`.
///
/// `to` must be greater than `from`.
pub fn angle_wrap_periodic(angle: f32, from: f32, to: f32) -> f32 {
    let period = to - from;
    let wrapped = (angle - from).rem_euclid(period) + from;

    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if wrapped >= to {
        from
    } else {
        wrapped
    }
}

/// Hermite smoothstep of `t` between `min` and `max`.
///
/// Returns 0 at or below `min`, 1 at or above `max`. An empty or
/// inverted range (`max <= min`) is a hard step at `min`, and a NaN
/// input gives 0.
#[inline]
pub fn smooth_step(t: f32, min: f32, max: f32) -> f32 {
    if t.is_nan() {
        return 0.0;
    }
    if max <= min {
        return if t >= min { 1.0 } else { 0.0 };
    }

    let t = clamp((t - min) / (max - min), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
