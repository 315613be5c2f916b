use std::f32::consts::FRAC_PI_2;
use std::fmt;

use crate::math::Quaternion;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Above this value of `(x*y + z*w) / |q|²` the attitude is treated as
/// exactly ±90° and bank is folded into heading.
const GIMBAL_LOCK_THRESHOLD: f32 = 0.499;

/// Intrinsic Y-Z-X euler angles in radians.
///
/// Applied in order heading (about Y), attitude (about Z), bank (about X).
/// Packed as `[heading, attitude, bank]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// Rotation about the Y axis
    pub heading: f32,

    /// Rotation about the (rotated) Z axis
    pub attitude: f32,

    /// Rotation about the (twice rotated) X axis
    pub bank: f32,
}

impl EulerAngles {
    #[inline]
    pub const fn new(heading: f32, attitude: f32, bank: f32) -> Self {
        Self { heading, attitude, bank }
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.heading, self.attitude, self.bank]
    }
}

impl From<[f32; 3]> for EulerAngles {
    #[inline]
    fn from([heading, attitude, bank]: [f32; 3]) -> Self {
        Self::new(heading, attitude, bank)
    }
}

impl From<EulerAngles> for [f32; 3] {
    #[inline]
    fn from(e: EulerAngles) -> Self {
        e.to_array()
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(heading: {}, attitude: {}, bank: {})",
            self.heading, self.attitude, self.bank
        )
    }
}

/// Converts Y-Z-X euler angles to a unit quaternion
pub fn euler_to_quat(euler: EulerAngles) -> Quaternion {
    let (s1, c1) = (euler.heading * 0.5).sin_cos();
    let (s2, c2) = (euler.attitude * 0.5).sin_cos();
    let (s3, c3) = (euler.bank * 0.5).sin_cos();

    // qY(heading) * qZ(attitude) * qX(bank), expanded
    Quaternion::new(
        s1 * s2 * c3 + c1 * c2 * s3,
        s1 * c2 * c3 + c1 * s2 * s3,
        c1 * s2 * c3 - s1 * c2 * s3,
        c1 * c2 * c3 - s1 * s2 * s3,
    )
}

/// Writes the quaternion for `euler` into `out`
#[inline]
pub fn euler_to_quat_into(euler: EulerAngles, out: &mut Quaternion) {
    *out = euler_to_quat(euler);
}

/// Converts a quaternion back to Y-Z-X euler angles.
///
/// Near attitude ±90° (gimbal lock) heading and bank cannot be separated;
/// the whole twist is reported as heading and bank is zero. Precision
/// degrades as the attitude approaches the poles.
pub fn quat_to_euler(quat: Quaternion) -> EulerAngles {
    let Quaternion { x, y, z, w } = quat;

    let (sqx, sqy, sqz, sqw) = (x * x, y * y, z * z, w * w);
    let unit = sqx + sqy + sqz + sqw;
    let test = x * y + z * w;

    if test > GIMBAL_LOCK_THRESHOLD * unit {
        return EulerAngles::new(2.0 * x.atan2(w), FRAC_PI_2, 0.0);
    }

    if test < -GIMBAL_LOCK_THRESHOLD * unit {
        return EulerAngles::new(-2.0 * x.atan2(w), -FRAC_PI_2, 0.0);
    }

    EulerAngles::new(
        (2.0 * y * w - 2.0 * x * z).atan2(sqx - sqy - sqz + sqw),
        (2.0 * test / unit).clamp(-1.0, 1.0).asin(),
        (2.0 * x * w - 2.0 * y * z).atan2(-sqx + sqy - sqz + sqw),
    )
}

/// Writes the euler angles of `quat` into `out`
#[inline]
pub fn quat_to_euler_into(quat: Quaternion, out: &mut EulerAngles) {
    *out = quat_to_euler(quat);
}
