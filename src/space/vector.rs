//! Vector primitives: norm, normalization, cross product, safe division, angles.
//!
//! The dimension-generic functions take `SVector<f64, D>`, so the planar and
//! spatial cases share one implementation and dimension mismatches are
//! rejected at compile time. `cross_slices` is the only runtime-checked entry.

use crate::error::{GeoError, GeoResult};
use nalgebra::{SVector, Vector3};

/// Euclidean (L2) norm: `sqrt(Σ vᵢ²)`.
#[inline]
pub fn get_norm<const D: usize>(v: &SVector<f64, D>) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Scale `v` to unit length.
///
/// A zero vector cannot be normalized: `fall_back` is returned when given,
/// otherwise the zero vector itself.
///
/// # Arguments
/// * `v` - Vector to normalize
/// * `fall_back` - Value returned when `‖v‖ == 0`
pub fn normalize<const D: usize>(
    v: &SVector<f64, D>,
    fall_back: Option<SVector<f64, D>>,
) -> SVector<f64, D> {
    let norm = get_norm(v);
    if norm > 0.0 {
        v / norm
    } else {
        fall_back.unwrap_or_else(SVector::<f64, D>::zeros)
    }
}

/// Standard 3D cross product `v1 × v2`.
#[inline]
pub fn cross(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        v1[1] * v2[2] - v1[2] * v2[1],
        v1[2] * v2[0] - v1[0] * v2[2],
        v1[0] * v2[1] - v1[1] * v2[0],
    )
}

/// Cross product on runtime-sized input.
///
/// Fails with [`GeoError::Dimension`] unless both slices have three components.
pub fn cross_slices(v1: &[f64], v2: &[f64]) -> GeoResult<Vector3<f64>> {
    let to_vector3 = |v: &[f64]| match *v {
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(GeoError::Dimension {
            operation: "cross",
            expected: "3",
            actual: v.len(),
        }),
    };
    Ok(cross(&to_vector3(v1)?, &to_vector3(v2)?))
}

/// Unit vector perpendicular to both inputs (zero when they are parallel).
pub fn get_unit_normal(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Vector3<f64> {
    normalize(&cross(v1, v2), None)
}

/// Division that can give `0/0` a defined value.
///
/// With `zero_over_zero_value` set, `0/0` yields that value. Every other case
/// (and `0/0` without a value) follows IEEE semantics, so `x/0` is ±inf and
/// unresolved `0/0` is NaN.
#[inline]
pub fn fdiv(a: f64, b: f64, zero_over_zero_value: Option<f64>) -> f64 {
    match zero_over_zero_value {
        Some(value) if a == 0.0 && b == 0.0 => value,
        _ => a / b,
    }
}

/// Element-wise [`fdiv`].
pub fn fdiv_vec<const D: usize>(
    a: &SVector<f64, D>,
    b: &SVector<f64, D>,
    zero_over_zero_value: Option<f64>,
) -> SVector<f64, D> {
    a.zip_map(b, |x, y| fdiv(x, y, zero_over_zero_value))
}

/// Angle between two vectors, always in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on
/// (anti)parallel inputs cannot produce NaN. A zero-length input has no
/// direction and yields NaN.
pub fn angle_between_vectors<const D: usize>(v1: &SVector<f64, D>, v2: &SVector<f64, D>) -> f64 {
    let cosine = fdiv(v1.dot(v2), get_norm(v1) * get_norm(v2), None);
    cosine.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ORIGIN, PI, RIGHT, UP, X_AXIS, Y_AXIS, Z_AXIS};
    use nalgebra::{Vector2, Vector4};

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_get_norm() {
        assert_eq!(get_norm(&Vector3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(get_norm(&Vector2::new(-6.0, 8.0)), 10.0);
        assert_eq!(get_norm(&Vector4::new(1.0, 1.0, 1.0, 1.0)), 2.0);
        assert_eq!(get_norm(&ORIGIN), 0.0);
    }

    #[test]
    fn test_normalize_has_unit_norm() {
        let vectors = [
            Vector3::new(3.0, 4.0, 12.0),
            Vector3::new(-1e-8, 2e-8, 0.0),
            Vector3::new(1e6, -3e6, 7e5),
        ];
        for v in &vectors {
            let n = normalize(v, None);
            assert!((get_norm(&n) - 1.0).abs() < TOLERANCE);
            // Direction is preserved
            assert!(cross(&n, v).norm() < 1e-6 * v.norm());
            assert!(n.dot(v) > 0.0);
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(&ORIGIN, None), ORIGIN);
        assert_eq!(normalize(&ORIGIN, Some(RIGHT)), RIGHT);
        assert_eq!(normalize(&Vector2::zeros(), None), Vector2::zeros());
    }

    #[test]
    fn test_normalize_ignores_fallback_for_nonzero() {
        let n = normalize(&Vector3::new(0.0, 5.0, 0.0), Some(RIGHT));
        assert_eq!(n, UP);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(cross(&X_AXIS, &Y_AXIS), Z_AXIS);
        assert_eq!(cross(&Y_AXIS, &X_AXIS), -Z_AXIS);
        assert_eq!(cross(&X_AXIS, &X_AXIS), ORIGIN);
    }

    #[test]
    fn test_cross_matches_nalgebra() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-0.5, 4.0, 3.0);
        assert!((cross(&a, &b) - a.cross(&b)).norm() < TOLERANCE);
    }

    #[test]
    fn test_cross_slices() {
        let result = cross_slices(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(result, Z_AXIS);

        let err = cross_slices(&[1.0, 0.0], &[0.0, 1.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            GeoError::Dimension {
                operation: "cross",
                expected: "3",
                actual: 2,
            }
        );
        assert!(cross_slices(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_get_unit_normal() {
        let n = get_unit_normal(&Vector3::new(2.0, 0.0, 0.0), &Vector3::new(0.0, 3.0, 0.0));
        assert!((n - Z_AXIS).norm() < TOLERANCE);

        // Parallel inputs have no normal
        assert_eq!(get_unit_normal(&RIGHT, &(RIGHT * 2.0)), ORIGIN);
    }

    #[test]
    fn test_fdiv_zero_over_zero() {
        assert_eq!(fdiv(0.0, 0.0, Some(7.0)), 7.0);
        assert!(fdiv(0.0, 0.0, None).is_nan());
        assert_eq!(fdiv(1.0, 0.0, Some(7.0)), f64::INFINITY);
        assert_eq!(fdiv(-1.0, 0.0, None), f64::NEG_INFINITY);
        assert_eq!(fdiv(6.0, 3.0, Some(7.0)), 2.0);
    }

    #[test]
    fn test_fdiv_vec() {
        let a = Vector3::new(0.0, 4.0, 0.0);
        let b = Vector3::new(0.0, 2.0, 5.0);
        assert_eq!(fdiv_vec(&a, &b, Some(1.0)), Vector3::new(1.0, 2.0, 0.0));

        let plain = fdiv_vec(&a, &b, None);
        assert!(plain[0].is_nan());
        assert_eq!(plain[1], 2.0);
    }

    #[test]
    fn test_angle_between_vectors() {
        assert!((angle_between_vectors(&X_AXIS, &Y_AXIS) - PI / 2.0).abs() < TOLERANCE);
        assert!((angle_between_vectors(&X_AXIS, &(-X_AXIS)) - PI).abs() < TOLERANCE);
        assert!(angle_between_vectors(&X_AXIS, &(X_AXIS * 3.0)).abs() < TOLERANCE);

        let diagonal = Vector2::new(1.0, 1.0);
        let angle = angle_between_vectors(&diagonal, &Vector2::new(1.0, 0.0));
        assert!((angle - PI / 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_angle_between_nearly_parallel_is_not_nan() {
        // Cosine rounds slightly above 1.0 without the clamp
        let v1 = Vector3::new(0.1, 0.2, 0.3);
        let v2 = Vector3::new(0.1, 0.2, 0.3) * 3.0;
        let angle = angle_between_vectors(&v1, &v2);
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-7);

        let anti = angle_between_vectors(&v1, &(-v2));
        assert!(!anti.is_nan());
        assert!((anti - PI).abs() < 1e-7);
    }

    #[test]
    fn test_angle_between_zero_vector_is_nan() {
        assert!(angle_between_vectors(&ORIGIN, &X_AXIS).is_nan());
    }
}
