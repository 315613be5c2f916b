use orient_kit::math::{Matrix4, Quaternion, Rotation, Vector3};
use orient_kit::orientation::{euler_to_quat, matrix_to_quat, quat_to_euler, EulerAngles};
use proptest::prelude::*;

fn unit_quat(ax: f32, ay: f32, az: f32, angle: f32) -> Option<Quaternion> {
    let axis = Vector3::new(ax, ay, az);
    (axis.length() > 0.1).then(|| Quaternion::from_axis_angle(axis, angle))
}

proptest! {
    #[test]
    fn euler_round_trip_preserves_rotation(
        ax in -1.0f32..1.0, ay in -1.0f32..1.0, az in -1.0f32..1.0,
        angle in -6.0f32..6.0,
    ) {
        let q = unit_quat(ax, ay, az, angle);
        prop_assume!(q.is_some());
        let q = q.unwrap();

        // Stay clear of the gimbal-lock band
        prop_assume!((q.x * q.y + q.z * q.w).abs() < 0.45);

        let back = euler_to_quat(quat_to_euler(q));
        prop_assert!(back.same_rotation(&q, 1e-4), "{} vs {}", back, q);
    }

    #[test]
    fn euler_angles_survive_conversion(
        heading in -3.0f32..3.0,
        attitude in -1.3f32..1.3,
        bank in -3.0f32..3.0,
    ) {
        let e = quat_to_euler(euler_to_quat(EulerAngles::new(heading, attitude, bank)));
        prop_assert!((e.heading - heading).abs() < 1e-3);
        prop_assert!((e.attitude - attitude).abs() < 1e-3);
        prop_assert!((e.bank - bank).abs() < 1e-3);
    }

    #[test]
    fn matrix_to_quat_rotates_like_the_matrix(
        ax in -1.0f32..1.0, ay in -1.0f32..1.0, az in -1.0f32..1.0,
        angle in -6.0f32..6.0,
        vx in -5.0f32..5.0, vy in -5.0f32..5.0, vz in -5.0f32..5.0,
    ) {
        let q = unit_quat(ax, ay, az, angle);
        prop_assume!(q.is_some());
        let q = q.unwrap();

        let m = Matrix4::from_rotation_translation(q.to_rotation_matrix(), Vector3::new(7.0, -3.0, 1.0));
        let v = Vector3::new(vx, vy, vz);

        let by_quat = matrix_to_quat(&m).rotate_vector(v);
        let by_matrix = m.multiply_direction(v);
        prop_assert!((by_quat - by_matrix).length() < 1e-3, "{} vs {}", by_quat, by_matrix);
    }
}
