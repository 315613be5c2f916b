pub mod math;
pub mod config;
pub mod orientation;
pub mod object;
pub mod util;

/// Re-export common types for easier usage
pub use crate::config::OrientationConfig;
pub use crate::math::{
    Matrix4, Quaternion, Vector3, Rotation,
    AXIS_X, AXIS_Y, AXIS_Z, AXIS_MX, AXIS_MY, AXIS_MZ,
    sign, clamp, angle_wrap_0_2pi, angle_wrap_periodic, smooth_step,
};
pub use crate::orientation::{
    AngleAxis, EulerAngles,
    matrix_to_quat, euler_to_quat, quat_to_euler, quat_to_dir, quat_to_angle_axis,
    quat_project, ground_project_quat, cam_quat_to_mesh_quat, correct_cam_quat_up,
    smooth, smooth_v, smooth_q,
};
pub use crate::object::{is_armature, is_mesh, is_vector, ObjectKind, SceneObject, Value};
pub use crate::util::{
    hash_code, keyfind, keysearch, random_from_array, xz_direction, line_plane_intersect,
};

/// Error types for orientation math
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum OrientationError {
        /// The reference direction handed to a plane projection does not
        /// lie in the plane.
        #[error("Wrong in-plane direction (dot = {dot}, tolerance = {tolerance})")]
        WrongInPlaneDirection { dot: f32, tolerance: f32 },

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for orientation operations
pub type Result<T> = std::result::Result<T, error::OrientationError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
