use orient_kit::math::{
    angle_wrap_0_2pi, angle_wrap_periodic, clamp, sign, smooth_step, Matrix3, Matrix4, Quaternion,
    Ray, Rotation, Vector3, AXIS_MZ, AXIS_X, AXIS_Y, AXIS_Z,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use approx::assert_relative_eq;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(v1.dot(&v2), 32.0);
    assert_eq!(v1.cross(&v2), Vector3::new(-3.0, 6.0, -3.0));

    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized * v1.length(), v1, epsilon = 1e-6);

    // Too short to normalize: left alone
    assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
}

#[test]
fn test_vector3_reject_keeps_in_plane_part() {
    let v = Vector3::new(1.0, 5.0, -2.0);
    let flat = v.reject(&Vector3::new(0.0, 3.0, 0.0));
    assert_relative_eq!(flat, Vector3::new(1.0, 0.0, -2.0));
}

#[test]
fn test_axis_constants() {
    assert_eq!(AXIS_X.cross(&AXIS_Y), AXIS_Z);
    assert_eq!(-AXIS_Z, AXIS_MZ);
    assert_eq!(<[f32; 3]>::from(orient_kit::AXIS_MY), [0.0, -1.0, 0.0]);
    assert_eq!(orient_kit::AXIS_MX, -AXIS_X);
}

#[test]
fn test_quaternion_operations() {
    let q = Quaternion::from_axis_angle(AXIS_Y, FRAC_PI_2);
    assert_relative_eq!(q.length(), 1.0);

    // 90 degrees about Y sends +X to -Z
    let rotated = q.rotate_vector(AXIS_X);
    assert_relative_eq!(rotated, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);

    let q_conj = q.conjugate();
    assert_eq!(q_conj.to_array(), [-q.x, -q.y, -q.z, q.w]);
    assert_relative_eq!(q_conj.rotate_vector(rotated), AXIS_X, epsilon = 1e-6);

    // Composition: q2 * q1 applies q1 first
    let q1 = Quaternion::from_axis_angle(AXIS_X, PI / 4.0);
    let q2 = Quaternion::from_axis_angle(AXIS_Y, PI / 4.0);
    let v = AXIS_Z;
    assert_relative_eq!(
        (q2 * q1).rotate_vector(v),
        q2.rotate_vector(q1.rotate_vector(v)),
        epsilon = 1e-6
    );
}

#[test]
fn test_quaternion_layout_is_xyzw() {
    let q = Quaternion::from([0.1, 0.2, 0.3, 0.9]);
    assert_eq!(q.x, 0.1);
    assert_eq!(q.w, 0.9);
    assert_eq!(Quaternion::identity().to_array(), [0.0, 0.0, 0.0, 1.0]);

    let na = q.to_nalgebra();
    assert_eq!(na.w, 0.9);
    assert_eq!(Quaternion::from_nalgebra(&na), q);
}

#[test]
fn test_rotation_arc() {
    let q = Quaternion::from_rotation_arc(AXIS_MZ, AXIS_X);
    assert_relative_eq!(q.rotate_vector(AXIS_MZ), AXIS_X, epsilon = 1e-6);

    // Opposite directions still produce a half turn
    let flip = Quaternion::from_rotation_arc(AXIS_MZ, AXIS_Z);
    assert_relative_eq!(flip.rotate_vector(AXIS_MZ), AXIS_Z, epsilon = 1e-6);

    assert_eq!(Quaternion::from_rotation_arc(AXIS_Y, AXIS_Y), Quaternion::IDENTITY);
}

#[test]
fn test_slerp_endpoints() {
    let a = Quaternion::identity();
    let b = Quaternion::from_axis_angle(AXIS_Y, 1.0);

    assert!(a.slerp(&b, 0.0).same_rotation(&a, 1e-6));
    assert!(a.slerp(&b, 1.0).same_rotation(&b, 1e-6));

    let half = a.slerp(&b, 0.5);
    assert_relative_eq!(half.angle(), 0.5, epsilon = 1e-5);
}

#[test]
fn test_matrix3_rotation_round_trip() {
    let q = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, -0.5), 0.8);
    let m = q.to_rotation_matrix();
    assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-5);

    let v = Vector3::new(0.3, -1.0, 2.0);
    assert_relative_eq!(m.multiply_vector(v), q.rotate_vector(v), epsilon = 1e-5);

    // Columns are the images of the world axes
    assert_relative_eq!(m.col(0), q.rotate_vector(AXIS_X), epsilon = 1e-6);
    assert_relative_eq!(
        Matrix3::from_cols(m.col(0), m.col(1), m.col(2)).transpose().multiply_vector(m.multiply_vector(v)),
        v,
        epsilon = 1e-5
    );
}

#[test]
fn test_matrix4_column_major_layout() {
    let packed = [
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ];
    let m = Matrix4::from_cols_array(&packed);

    // First column holds 1..4
    assert_eq!(m.data[0][0], 1.0);
    assert_eq!(m.data[3][0], 4.0);
    assert_eq!(m.data[0][1], 5.0);
    assert_eq!(m.get_translation(), Vector3::new(13.0, 14.0, 15.0));
    assert_eq!(m.to_cols_array(), packed);
    assert_eq!(m.transpose().transpose(), m);

    // nalgebra uses the same packed order
    assert_eq!(m.to_nalgebra().as_slice(), &packed[..]);
    assert_eq!(Matrix4::from_nalgebra(&m.to_nalgebra()), m);
}

#[test]
fn test_matrix4_transforms_points_and_directions() {
    let rot = Quaternion::from_axis_angle(AXIS_Y, FRAC_PI_2).to_rotation_matrix();
    let m = Matrix4::from_rotation_translation(rot, Vector3::new(1.0, 2.0, 3.0));

    assert_relative_eq!(m.multiply_point(AXIS_X), Vector3::new(1.0, 2.0, 2.0), epsilon = 1e-6);
    assert_relative_eq!(m.multiply_direction(AXIS_X), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    assert_eq!(Matrix4::default(), Matrix4::identity());
}

#[test]
fn test_sign() {
    assert_eq!(sign(5.0), 1.0);
    assert_eq!(sign(-3.0), -1.0);
    assert_eq!(sign(0.0), 0.0);
    assert_eq!(sign(-0.0), 0.0);
}

#[test]
fn test_clamp() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
}

#[test]
fn test_clamp_inverted_range_returns_min() {
    assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    assert_eq!(clamp(-5.0, 10.0, 0.0), 10.0);
    assert_eq!(clamp(50.0, 10.0, 0.0), 10.0);
}

#[test]
fn test_angle_wrap_0_2pi() {
    assert_relative_eq!(angle_wrap_0_2pi(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-5);
    assert_relative_eq!(angle_wrap_0_2pi(5.0 * PI), PI, epsilon = 1e-5);
    assert_eq!(angle_wrap_0_2pi(0.0), 0.0);

    let wrapped = angle_wrap_0_2pi(TAU);
    assert!((0.0..TAU).contains(&wrapped));
    assert!(wrapped < 1e-5);
}

#[test]
fn test_angle_wrap_periodic() {
    assert_relative_eq!(angle_wrap_periodic(3.0 * FRAC_PI_2, -PI, PI), -FRAC_PI_2, epsilon = 1e-5);
    assert_relative_eq!(angle_wrap_periodic(-7.0, -5.0, 5.0), 3.0, epsilon = 1e-5);
    assert_relative_eq!(angle_wrap_periodic(12.0, 0.0, 10.0), 2.0, epsilon = 1e-5);

    let w = angle_wrap_periodic(-1.0e-9, 0.0, TAU);
    assert!((0.0..TAU).contains(&w));
}

#[test]
fn test_smooth_step() {
    assert_eq!(smooth_step(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(smooth_step(2.0, 0.0, 1.0), 1.0);
    assert_relative_eq!(smooth_step(0.5, 0.0, 1.0), 0.5);
    assert_relative_eq!(smooth_step(15.0, 10.0, 20.0), 0.5);
    assert_relative_eq!(smooth_step(0.25, 0.0, 1.0), 0.15625);
}

#[test]
fn test_smooth_step_empty_range_is_hard_step() {
    assert_eq!(smooth_step(4.9, 5.0, 5.0), 0.0);
    assert_eq!(smooth_step(5.0, 5.0, 5.0), 1.0);
    assert_eq!(smooth_step(7.0, 5.0, 5.0), 1.0);

    // Inverted range steps at min too
    assert_eq!(smooth_step(4.0, 5.0, 1.0), 0.0);
    assert_eq!(smooth_step(5.5, 5.0, 1.0), 1.0);
}

#[test]
fn test_smooth_step_nan_input() {
    assert_eq!(smooth_step(f32::NAN, 0.0, 1.0), 0.0);
    assert_eq!(smooth_step(f32::NAN, 2.0, 2.0), 0.0);
    assert!(smooth_step(0.3, 0.0, 1.0).is_finite());
}

#[test]
fn test_ray_plane_intersection() {
    let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(1.0, -1.0, 0.0));

    // Ground plane y = 0
    let hit = ray.intersect_plane(AXIS_Y, 0.0).unwrap();
    assert_relative_eq!(hit, Vector3::new(5.0, 0.0, 0.0), epsilon = 1e-6);

    // Plane y = 2 written as y - 2 = 0
    assert_relative_eq!(ray.plane_parameter(AXIS_Y, -2.0).unwrap(), 3.0, epsilon = 1e-6);

    let parallel = Ray::new(Vector3::new(0.0, 5.0, 0.0), AXIS_X);
    assert!(parallel.intersect_plane(AXIS_Y, 0.0).is_none());
}
