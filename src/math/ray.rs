use crate::math::{Vector3, EPSILON};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Half-line used for picking and plane intersection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Origin of the ray
    pub origin: Vector3,

    /// Direction of the ray (not necessarily normalized)
    pub direction: Vector3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Builds the ray from `from` through `to`
    #[inline]
    pub fn through(from: Vector3, to: Vector3) -> Self {
        Self::new(from, to - from)
    }

    /// Returns the point at parameter `t` along the ray
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Parameter at which the supporting line meets the plane
    /// `normal · p + dist = 0`, or `None` when they are parallel.
    ///
    /// The parameter may be negative: the intersection lies behind the origin.
    pub fn plane_parameter(&self, normal: Vector3, dist: f32) -> Option<f32> {
        let denom = normal.dot(&self.direction);
        if denom.abs() < EPSILON {
            return None;
        }
        Some(-(normal.dot(&self.origin) + dist) / denom)
    }

    /// Point where the supporting line meets the plane `normal · p + dist = 0`
    pub fn intersect_plane(&self, normal: Vector3, dist: f32) -> Option<Vector3> {
        self.plane_parameter(normal, dist).map(|t| self.point_at(t))
    }
}
