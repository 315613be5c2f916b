use crate::math::{Vector3, Matrix3, AXIS_X, AXIS_Y, EPSILON};
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Rotation quaternion, laid out as `(x, y, z, w)` like the engine's
/// packed 4-float buffers.
///
/// Orientation code expects unit quaternions but nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion {
    /// First imaginary component
    pub x: f32,

    /// Second imaginary component
    pub y: f32,

    /// Third imaginary component
    pub z: f32,

    /// Real component
    pub w: f32,
}

/// Rotation trait for rotation representations
pub trait Rotation {
    /// Rotate a vector by this rotation
    fn rotate_vector(&self, v: Vector3) -> Vector3;

    /// Get the angle in radians of this rotation, in `[0, 2π]`
    fn angle(&self) -> f32;

    /// Get the axis of this rotation
    fn axis(&self) -> Vector3;
}

impl Quaternion {
    /// The rotation that leaves every vector in place
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a quaternion rotating `angle` radians about `axis`
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Shortest-arc rotation carrying direction `from` onto direction `to`.
    ///
    /// Opposite directions pick an arbitrary perpendicular axis. A zero
    /// `to` has no direction and yields the identity.
    pub fn from_rotation_arc(from: Vector3, to: Vector3) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        let dot = from.dot(&to);

        if dot < -0.999_999 {
            let mut axis = AXIS_X.cross(&from);
            if axis.length() < 1.0e-6 {
                axis = AXIS_Y.cross(&from);
            }
            return Self::from_axis_angle(axis, std::f32::consts::PI);
        }

        if dot > 0.999_999 {
            return Self::IDENTITY;
        }

        let c = from.cross(&to);
        Self::new(c.x, c.y, c.z, 1.0 + dot).normalize()
    }

    /// Extracts the rotation of an orthonormal 3x3 matrix.
    ///
    /// Branches on the largest diagonal term so the square root argument
    /// stays well away from zero.
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.data;
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, 0.25 / s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Converts the quaternion to a rotation matrix
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        let Self { x, y, z, w } = *self;

        let (xx, xy, xz, xw) = (x * x, x * y, x * z, x * w);
        let (yy, yz, yw) = (y * y, y * z, y * w);
        let (zz, zw) = (z * z, z * w);

        Matrix3::new([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - zw), 2.0 * (xz + yw)],
            [2.0 * (xy + zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - xw)],
            [2.0 * (xz - yw), 2.0 * (yz + xw), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// Returns the conjugate, which is the inverse rotation for unit quaternions
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit quaternion; a zero quaternion becomes the identity
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > EPSILON {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the imaginary part as a vector
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// True when both quaternions describe the same rotation (`q` and `-q`
    /// are treated as equal)
    pub fn same_rotation(&self, other: &Self, epsilon: f32) -> bool {
        self.abs_diff_eq(other, epsilon) || self.abs_diff_eq(&-*other, epsilon)
    }

    /// Spherical linear interpolation between two quaternions
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut cos_half_theta = self.dot(other);

        // Take the shorter path around the hypersphere.
        let mut target = *other;
        if cos_half_theta < 0.0 {
            target = -target;
            cos_half_theta = -cos_half_theta;
        }

        let nlerp = |a: f32, b: f32| {
            Self::new(
                self.x * a + target.x * b,
                self.y * a + target.y * b,
                self.z * a + target.z * b,
                self.w * a + target.w * b,
            )
        };

        if cos_half_theta > 0.999 {
            return nlerp(1.0 - t, t).normalize();
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();

        if sin_half_theta.abs() < 0.001 {
            return nlerp(0.5, 0.5).normalize();
        }

        let ratio_a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;
        nlerp(ratio_a, ratio_b)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Convert to nalgebra Quaternion
    #[inline]
    pub fn to_nalgebra(&self) -> nalgebra::Quaternion<f32> {
        nalgebra::Quaternion::new(self.w, self.x, self.y, self.z)
    }

    /// Convert from nalgebra Quaternion
    #[inline]
    pub fn from_nalgebra(q: &nalgebra::Quaternion<f32>) -> Self {
        Self::new(q.i, q.j, q.k, q.w)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation for Quaternion {
    /// Rotates a vector by this quaternion (q * v * q^-1)
    fn rotate_vector(&self, v: Vector3) -> Vector3 {
        let u = self.xyz();
        let t = u.cross(&v) * 2.0;
        v + t * self.w + u.cross(&t)
    }

    fn angle(&self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    /// Returns the normalized axis of this rotation, or +X when the
    /// rotation is too small to define one
    fn axis(&self) -> Vector3 {
        let v = self.xyz();
        let len = v.length();
        if len > EPSILON {
            v / len
        } else {
            AXIS_X
        }
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Hamilton product; `a * b` applies `b` first, then `a`
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
