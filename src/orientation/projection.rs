use tracing::error;

use crate::config::OrientationConfig;
use crate::error::OrientationError;
use crate::math::{Quaternion, Rotation, Vector3, AXIS_MY, AXIS_MZ, AXIS_Y, EPSILON};

/// Projects `quat` onto the plane with normal `plane_normal`, giving a
/// rotation that only turns about that normal.
///
/// `quat_ident_dir` is the direction `quat` is measured from and
/// `plane_ident_dir` is the in-plane direction the result is measured
/// from. The latter must be exactly perpendicular to `plane_normal`;
/// otherwise nothing is computed, the failure is logged and
/// [`OrientationError::WrongInPlaneDirection`] is returned. Use
/// [`quat_project_with`] to accept nearly perpendicular directions.
pub fn quat_project(
    quat: Quaternion,
    quat_ident_dir: Vector3,
    plane_normal: Vector3,
    plane_ident_dir: Vector3,
) -> crate::Result<Quaternion> {
    quat_project_with(
        &OrientationConfig::default(),
        quat,
        quat_ident_dir,
        plane_normal,
        plane_ident_dir,
    )
}

/// Same as [`quat_project`], accepting `plane_ident_dir` whenever
/// `|dot(plane_normal, plane_ident_dir)|` is within
/// `config.in_plane_tolerance`. An invalid tolerance (negative or not
/// finite) is rejected with [`OrientationError::InvalidParameter`].
pub fn quat_project_with(
    config: &OrientationConfig,
    quat: Quaternion,
    quat_ident_dir: Vector3,
    plane_normal: Vector3,
    plane_ident_dir: Vector3,
) -> crate::Result<Quaternion> {
    config.validate()?;
    check_in_plane(config.in_plane_tolerance, plane_normal, plane_ident_dir)?;
    Ok(project(quat, quat_ident_dir, plane_normal, plane_ident_dir))
}

/// Writes the projection into `out`. On failure `out` is left untouched.
pub fn quat_project_into(
    quat: Quaternion,
    quat_ident_dir: Vector3,
    plane_normal: Vector3,
    plane_ident_dir: Vector3,
    out: &mut Quaternion,
) -> crate::Result<()> {
    *out = quat_project(quat, quat_ident_dir, plane_normal, plane_ident_dir)?;
    Ok(())
}

/// Flattens an orientation onto the horizontal ground plane.
///
/// `quat` is measured from -Y and the result from -Z, turning about +Y
/// only. A rotation that still looks straight up or down has no heading
/// and projects to the identity.
#[inline]
pub fn ground_project_quat(quat: Quaternion) -> Quaternion {
    // -Z is exactly perpendicular to +Y, so the in-plane check always passes.
    project(quat, AXIS_MY, AXIS_Y, AXIS_MZ)
}

#[inline]
pub fn ground_project_quat_into(quat: Quaternion, out: &mut Quaternion) {
    *out = ground_project_quat(quat);
}

fn check_in_plane(tolerance: f32, plane_normal: Vector3, plane_ident_dir: Vector3) -> crate::Result<()> {
    let dot = plane_normal.dot(&plane_ident_dir);

    // With zero tolerance this is an exact `dot == 0` test. NaN fails it.
    if !(dot.abs() <= tolerance) {
        error!(dot, tolerance, "Wrong in-plane direction");
        return Err(OrientationError::WrongInPlaneDirection { dot, tolerance });
    }

    Ok(())
}

fn project(
    quat: Quaternion,
    quat_ident_dir: Vector3,
    plane_normal: Vector3,
    plane_ident_dir: Vector3,
) -> Quaternion {
    let dir = quat.rotate_vector(quat_ident_dir);
    let in_plane = dir.reject(&plane_normal);

    if in_plane.length() < EPSILON {
        return Quaternion::IDENTITY;
    }

    Quaternion::from_rotation_arc(plane_ident_dir, in_plane)
}
