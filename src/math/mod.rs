mod vector;
mod matrix;
mod rotation;
mod ray;
pub mod angle;

pub use vector::{Vector3, Vector4};
pub use matrix::{Matrix3, Matrix4};
pub use rotation::{Quaternion, Rotation};
pub use ray::Ray;
pub use angle::{angle_wrap_0_2pi, angle_wrap_periodic, smooth_step};

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Unit +X axis
pub const AXIS_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
/// Unit +Y axis (world up)
pub const AXIS_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
/// Unit +Z axis
pub const AXIS_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);
/// Unit -X axis
pub const AXIS_MX: Vector3 = Vector3::new(-1.0, 0.0, 0.0);
/// Unit -Y axis
pub const AXIS_MY: Vector3 = Vector3::new(0.0, -1.0, 0.0);
/// Unit -Z axis (camera view direction)
pub const AXIS_MZ: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Sign of `value` as -1, 0 or 1. Both zeros (and NaN) give 0.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamps a value between a minimum and maximum value.
///
/// An inverted range (`min > max`) always yields `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if min > max || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
