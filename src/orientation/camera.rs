use std::f32::consts::FRAC_1_SQRT_2;

use tracing::debug;

use crate::math::{Matrix3, Quaternion, Rotation, Vector3, AXIS_MZ, AXIS_X, AXIS_Y, EPSILON};

/// +90° about X: carries mesh -Y (facing) onto camera -Z (view)
const CAM_TO_MESH_OFFSET: Quaternion = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

/// Re-expresses a camera orientation in the mesh convention, so a mesh
/// given the result faces where the camera looks
#[inline]
pub fn cam_quat_to_mesh_quat(cam_quat: Quaternion) -> Quaternion {
    cam_quat * CAM_TO_MESH_OFFSET
}

#[inline]
pub fn cam_quat_to_mesh_quat_into(cam_quat: Quaternion, out: &mut Quaternion) {
    *out = cam_quat_to_mesh_quat(cam_quat);
}

/// Removes roll from a camera orientation, **mutating `quat` in place**.
///
/// The view direction is preserved and the right axis is made horizontal.
/// An upside-down camera stays upside down unless `up_only` is set, in
/// which case its up axis is turned back to the upper hemisphere. A
/// camera looking straight up or down keeps its current heading.
pub fn correct_cam_quat_up(quat: &mut Quaternion, up_only: bool) {
    let view = quat.rotate_vector(AXIS_MZ);
    let up_now = quat.rotate_vector(AXIS_Y);

    let mut right = view.cross(&AXIS_Y);

    if right.length() < EPSILON {
        debug!(%view, "camera is vertical, keeping current heading");
        let current = quat.rotate_vector(AXIS_X);
        right = Vector3::new(current.x, 0.0, current.z);
        if right.length() < EPSILON {
            right = AXIS_X;
        }
        right.normalize_mut();
    } else {
        right.normalize_mut();
        if !up_only && up_now.y < 0.0 {
            right = -right;
        }
    }

    let up = right.cross(&view).normalize();
    let basis = Matrix3::from_cols(right, up, -view.normalize());

    *quat = Quaternion::from_rotation_matrix(&basis).normalize();
}
