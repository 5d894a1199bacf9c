//! Integration tests: the rotation representations agree with each other
//!
//! Angle-axis, quaternion and matrix are three views of the same rotation.
//! These tests sweep axes, angles and vectors and check that converting
//! between the views and rotating through each path gives the same result.


use geo_space::constants::{PI, TAU};
use geo_space::{
    Quaternion, RotationMatrix, angle_axis_from_quaternion, get_norm, normalize,
    quaternion_conjugate, quaternion_from_angle_axis, quaternion_mult, rotate_vector_3d,
    rotation_matrix,
};
use geo_test_utils::{
    approx_eq, generate_half_turn_angles, generate_test_vectors, generate_unit_axes,
    same_direction,
};
use nalgebra::Vector3;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_quaternion_and_matrix_paths_agree() {
    let axes = generate_unit_axes(24);
    let vectors = generate_test_vectors(8);

    for axis in &axes {
        for angle in [-2.0, -0.3, 0.0, 0.5, 1.0, PI / 2.0, 2.7, PI, 4.0, TAU - 0.1] {
            let matrix = rotation_matrix(angle, axis);
            assert!(matrix.is_valid(TOLERANCE), "not in SO(3) for axis {axis:?}");

            for v in &vectors {
                let by_quaternion = rotate_vector_3d(v, angle, axis);
                let by_matrix = matrix.apply(v);
                assert!(
                    approx_eq(&by_quaternion, &by_matrix, TOLERANCE),
                    "Paths disagree for angle {angle}, axis {axis:?}, v {v:?}: {by_quaternion:?} vs {by_matrix:?}"
                );
            }
        }
    }
}

#[test]
fn test_paths_agree_for_non_unit_axes() {
    let axis = Vector3::new(0.0, -3.0, 4.0);
    let v = Vector3::new(1.0, 1.0, 1.0);
    let by_quaternion = rotate_vector_3d(&v, 1.25, &axis);
    let by_matrix = rotation_matrix(1.25, &axis) * v;
    assert!(approx_eq(&by_quaternion, &by_matrix, TOLERANCE));
}

#[test]
fn test_angle_axis_roundtrip_over_half_turns() {
    for axis in &generate_unit_axes(16) {
        for angle in generate_half_turn_angles(12) {
            let q = quaternion_from_angle_axis(angle, axis);
            let (recovered_angle, recovered_axis) = angle_axis_from_quaternion(&q);

            assert!(
                (recovered_angle - angle).abs() < 1e-7,
                "angle {angle} recovered as {recovered_angle}"
            );
            if angle > 0.0 {
                assert!(same_direction(&recovered_axis, axis, 1e-7));
            }
        }
    }
}

#[test]
fn test_angle_axis_fold_reverses_direction_above_half_turn() {
    // Folding keeps the axis, so the recovered pair rotates the other way
    let axis = Vector3::new(0.0, 0.0, 1.0);
    let angle = 1.5 * PI;
    let q = quaternion_from_angle_axis(angle, &axis);
    let (folded_angle, folded_axis) = angle_axis_from_quaternion(&q);

    let v = Vector3::new(1.0, 0.0, 0.0);
    let original = rotate_vector_3d(&v, angle, &axis);
    let from_folded = rotate_vector_3d(&v, folded_angle, &folded_axis);
    let from_folded_flipped = rotate_vector_3d(&v, folded_angle, &(-folded_axis));

    assert!(!approx_eq(&original, &from_folded, 1e-6));
    assert!(approx_eq(&original, &from_folded_flipped, TOLERANCE));
}

#[test]
fn test_rotation_quaternions_are_unit() {
    for axis in &generate_unit_axes(10) {
        let scaled_axis = axis * 7.5;
        for angle in generate_half_turn_angles(6) {
            let q = quaternion_from_angle_axis(angle, &scaled_axis);
            assert!((q.norm() - 1.0).abs() < TOLERANCE);
            assert!((q.w() - (angle / 2.0).cos()).abs() < TOLERANCE);
            assert!(approx_eq(
                &q.vector(),
                &(axis * (angle / 2.0).sin()),
                TOLERANCE
            ));
        }
    }
}

#[test]
fn test_composition_matches_matrix_product() {
    let axis_a = Vector3::new(1.0, 0.0, 0.0);
    let axis_b = Vector3::new(0.3, 0.9, -0.2);
    let qa = quaternion_from_angle_axis(0.8, &axis_a);
    let qb = quaternion_from_angle_axis(-1.9, &axis_b);

    // Apply b first, then a
    let composed_q = quaternion_mult(&qa, &qb);
    let composed_m = rotation_matrix(0.8, &axis_a) * rotation_matrix(-1.9, &axis_b);

    let from_q = RotationMatrix::from_quaternion(&composed_q);
    assert!((from_q.matrix() - composed_m.matrix()).amax() < TOLERANCE);
}

#[test]
fn test_quaternion_mult_associative_not_commutative() {
    let q1 = Quaternion::new(0.2, 1.0, -0.5, 2.0);
    let q2 = Quaternion::new(1.5, -0.25, 0.75, 0.0);
    let q3 = Quaternion::new(-1.0, 0.5, 0.5, -3.0);

    let left = quaternion_mult(&q1, &quaternion_mult(&q2, &q3));
    let right = quaternion_mult(&quaternion_mult(&q1, &q2), &q3);
    assert!(left.is_approx(&right, TOLERANCE));
    assert!(!quaternion_mult(&q1, &q2).is_approx(&quaternion_mult(&q2, &q1), 1e-6));
}

#[test]
fn test_sandwich_product_of_pure_quaternion_is_pure() {
    let q = quaternion_from_angle_axis(1.1, &Vector3::new(2.0, -1.0, 0.5));
    for v in &generate_test_vectors(6) {
        let product = quaternion_mult(
            &quaternion_mult(&q, &Quaternion::pure(v)),
            &quaternion_conjugate(&q),
        );
        assert!(product.w().abs() < TOLERANCE);
        assert!((get_norm(&product.vector()) - get_norm(v)).abs() < TOLERANCE);
    }
}

#[test]
fn test_normalize_sweep() {
    for v in &generate_test_vectors(20) {
        if get_norm(v) > 0.0 {
            assert!((get_norm(&normalize(v, None)) - 1.0).abs() < 1e-12);
        }
    }
}
