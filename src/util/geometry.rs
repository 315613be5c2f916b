use crate::math::{Ray, Vector3};

/// Horizontal heading of `dir`: its XZ part, normalized.
///
/// A vertical (or zero) direction has no heading and yields zero.
pub fn xz_direction(dir: Vector3) -> Vector3 {
    let flat = Vector3::new(dir.x, 0.0, dir.z);
    if flat.is_zero() {
        Vector3::ZERO
    } else {
        flat.normalize()
    }
}

#[inline]
pub fn xz_direction_into(dir: Vector3, out: &mut Vector3) {
    *out = xz_direction(dir);
}

/// Intersects the line supporting `ray` with the plane
/// `plane_normal · p + plane_dist = 0`.
///
/// Points behind the ray origin count. `None` when the line is parallel
/// to the plane.
#[inline]
pub fn line_plane_intersect(ray: &Ray, plane_normal: Vector3, plane_dist: f32) -> Option<Vector3> {
    ray.intersect_plane(plane_normal, plane_dist)
}
