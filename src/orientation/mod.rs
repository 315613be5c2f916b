mod euler;
mod convert;
mod projection;
mod camera;
mod smoothing;

pub use self::euler::{euler_to_quat, euler_to_quat_into, quat_to_euler, quat_to_euler_into, EulerAngles};
pub use self::convert::{
    matrix_to_quat, matrix_to_quat_into, quat_to_angle_axis, quat_to_angle_axis_into, quat_to_dir,
    quat_to_dir_into, rotation_to, AngleAxis,
};
pub use self::projection::{
    ground_project_quat, ground_project_quat_into, quat_project, quat_project_into, quat_project_with,
};
pub use self::camera::{cam_quat_to_mesh_quat, cam_quat_to_mesh_quat_into, correct_cam_quat_up};
pub use self::smoothing::{smooth, smooth_q, smooth_q_into, smooth_v, smooth_v_into};
