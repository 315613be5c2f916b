use crate::math::{Matrix4, Quaternion, Rotation, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rotation expressed as an angle about a unit axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AngleAxis {
    /// Rotation angle in radians, in `[0, 2π]`
    pub angle: f32,

    /// Unit rotation axis
    pub axis: Vector3,
}

impl AngleAxis {
    #[inline]
    pub fn new(angle: f32, axis: Vector3) -> Self {
        Self { angle, axis }
    }

    /// Rebuilds the quaternion
    #[inline]
    pub fn to_quat(&self) -> Quaternion {
        Quaternion::from_axis_angle(self.axis, self.angle)
    }
}

impl Default for AngleAxis {
    fn default() -> Self {
        Self::new(0.0, crate::math::AXIS_X)
    }
}

/// Extracts the rotation of a transform matrix.
///
/// Only the upper-left 3x3 block is read and it must be a pure rotation;
/// scale or shear produce a meaningless result.
#[inline]
pub fn matrix_to_quat(matrix: &Matrix4) -> Quaternion {
    Quaternion::from_rotation_matrix(&matrix.to_matrix3())
}

#[inline]
pub fn matrix_to_quat_into(matrix: &Matrix4, out: &mut Quaternion) {
    *out = matrix_to_quat(matrix);
}

/// Direction that `identity_dir` points to after rotating by `quat`
#[inline]
pub fn quat_to_dir(quat: Quaternion, identity_dir: Vector3) -> Vector3 {
    quat.rotate_vector(identity_dir)
}

#[inline]
pub fn quat_to_dir_into(quat: Quaternion, identity_dir: Vector3, out: &mut Vector3) {
    *out = quat_to_dir(quat, identity_dir);
}

/// Splits a unit quaternion into angle and axis.
///
/// A rotation too small to define an axis reports +X.
pub fn quat_to_angle_axis(quat: Quaternion) -> AngleAxis {
    AngleAxis::new(quat.angle(), quat.axis())
}

#[inline]
pub fn quat_to_angle_axis_into(quat: Quaternion, out: &mut AngleAxis) {
    *out = quat_to_angle_axis(quat);
}

/// Shortest-arc rotation taking direction `from` to direction `to`
#[inline]
pub fn rotation_to(from: Vector3, to: Vector3) -> Quaternion {
    Quaternion::from_rotation_arc(from, to)
}
