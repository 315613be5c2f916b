use crate::math::{Quaternion, Vector3};

/// Fraction of the remaining difference covered over `delta`, or `None`
/// when smoothing is disabled by a non-positive `period`
#[inline]
fn smoothing_factor(delta: f32, period: f32) -> Option<f32> {
    (period > 0.0).then(|| 1.0 - (-delta / period).exp())
}

/// Smooths a scalar toward `curr`
#[inline]
pub fn smooth(curr: f32, last: f32, delta: f32, period: f32) -> f32 {
    match smoothing_factor(delta, period) {
        Some(k) => last + (curr - last) * k,
        None => curr,
    }
}

/// Smooths each component of a vector toward `curr`
pub fn smooth_v(curr: Vector3, last: Vector3, delta: f32, period: f32) -> Vector3 {
    Vector3::new(
        smooth(curr.x, last.x, delta, period),
        smooth(curr.y, last.y, delta, period),
        smooth(curr.z, last.z, delta, period),
    )
}

#[inline]
pub fn smooth_v_into(curr: Vector3, last: Vector3, delta: f32, period: f32, out: &mut Vector3) {
    *out = smooth_v(curr, last, delta, period);
}

/// Smooths an orientation along the great arc from `last` to `curr`
pub fn smooth_q(curr: Quaternion, last: Quaternion, delta: f32, period: f32) -> Quaternion {
    match smoothing_factor(delta, period) {
        Some(k) => last.slerp(&curr, k),
        None => curr,
    }
}

#[inline]
pub fn smooth_q_into(curr: Quaternion, last: Quaternion, delta: f32, period: f32, out: &mut Quaternion) {
    *out = smooth_q(curr, last, delta, period);
}
