//! Rotating vectors, and rotation matrices in SO(3).
//!
//! Two equivalent paths rotate a 3-vector about an axis:
//! - the quaternion sandwich product [`rotate_vector_3d`]
//! - the matrix [`rotation_matrix`], built as a change of basis that sends the
//!   z-axis to the rotation axis, a rotation about z, and the change back
//!
//! Both agree to floating-point tolerance for any non-zero axis. Planar
//! vectors rotate through complex multiplication by `e^{iθ}`.

use crate::error::{GeoError, GeoResult};
use crate::space::GeoVector;
use crate::space::quaternion::{Quaternion, quaternion_from_angle_axis};
use crate::space::vector::get_norm;
use nalgebra::{Complex, DMatrix, Matrix3, Vector2, Vector3};
use std::fmt;
use std::ops::Mul;
use tracing::debug;

/// Rotate a planar vector by `angle` radians (counter-clockwise).
pub fn rotate_vector_2d(v: &Vector2<f64>, angle: f64) -> Vector2<f64> {
    let z = Complex::new(v.x, v.y) * Complex::new(0.0, angle).exp();
    Vector2::new(z.re, z.im)
}

/// Rotate a 3-vector by `angle` radians about `axis` (right-hand rule).
///
/// Computes the vector part of `q · (0, v) · q*` with `q` from
/// [`quaternion_from_angle_axis`]. `axis` need not be unit length.
pub fn rotate_vector_3d(v: &Vector3<f64>, angle: f64, axis: &Vector3<f64>) -> Vector3<f64> {
    let quat = quaternion_from_angle_axis(angle, axis);
    let quat_inv = quat.conjugate();
    let product = quat * Quaternion::pure(v) * quat_inv;
    product.vector()
}

/// Rotate a planar or spatial vector.
///
/// Planar vectors rotate in their plane and ignore `axis`; pass
/// [`OUT`](crate::constants::OUT) as the conventional default.
pub fn rotate_vector(v: &GeoVector, angle: f64, axis: &Vector3<f64>) -> GeoVector {
    match v {
        GeoVector::Planar(planar) => GeoVector::Planar(rotate_vector_2d(planar, angle)),
        GeoVector::Spatial(spatial) => GeoVector::Spatial(rotate_vector_3d(spatial, angle, axis)),
    }
}

/// [`rotate_vector`] for runtime-sized input.
///
/// Fails with [`GeoError::Dimension`] unless `components` has 2 or 3 entries.
pub fn rotate_slice(components: &[f64], angle: f64, axis: &Vector3<f64>) -> GeoResult<GeoVector> {
    let v = GeoVector::try_from(components).map_err(|_| GeoError::Dimension {
        operation: "rotate_vector",
        expected: "2 or 3",
        actual: components.len(),
    })?;
    Ok(rotate_vector(&v, angle, axis))
}

/// A 3×3 rotation matrix, an element of SO(3).
///
/// Invariants `RᵀR = I` and `det R = 1` hold for every matrix built by this
/// module; [`RotationMatrix::is_valid`] checks them for matrices built
/// elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    matrix: Matrix3<f64>,
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.matrix;
        write!(
            f,
            "RotationMatrix([{:.4}, {:.4}, {:.4}], [{:.4}, {:.4}, {:.4}], [{:.4}, {:.4}, {:.4}])",
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)]
        )
    }
}

impl RotationMatrix {
    /// Wrap a raw matrix without checking it. See [`RotationMatrix::is_valid`].
    pub fn from_matrix_unchecked(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Same as [`rotation_matrix`].
    pub fn from_angle_axis(angle: f64, axis: &Vector3<f64>) -> Self {
        rotation_matrix(angle, axis)
    }

    /// Convert a unit quaternion to its rotation matrix.
    ///
    /// The input is normalized first; the zero quaternion maps to the identity.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let norm = q.norm();
        if norm == 0.0 {
            return Self::identity();
        }
        let w = q.w() / norm;
        let x = q.x() / norm;
        let y = q.y() / norm;
        let z = q.z() / norm;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        let matrix = Matrix3::new(
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy - wz),
            2.0 * (xz + wy),
            2.0 * (xy + wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz - wx),
            2.0 * (xz - wy),
            2.0 * (yz + wx),
            1.0 - 2.0 * (xx + yy),
        );

        Self { matrix }
    }

    /// Convert to a unit quaternion (Shepperd's method).
    ///
    /// The component with the largest magnitude is recovered first from the
    /// diagonal and the other three are divided by it, so the divisor is never
    /// smaller than `1/2`. The result may be `-q` for a matrix built from `q`.
    /// Both represent the same rotation.
    pub fn to_quaternion(&self) -> Quaternion {
        let m = &self.matrix;
        let trace = m.trace();
        let diagonal = m.diagonal();

        // Pivot 3 is w; pivots 0..3 are x, y, z.
        let pivot = (0..3).fold(3, |best, i| {
            let best_value = if best == 3 { trace } else { diagonal[best] };
            if diagonal[i] > best_value { i } else { best }
        });

        if pivot == 3 {
            let four_w = 2.0 * (1.0 + trace).sqrt();
            return Quaternion::new(
                four_w / 4.0,
                (m[(2, 1)] - m[(1, 2)]) / four_w,
                (m[(0, 2)] - m[(2, 0)]) / four_w,
                (m[(1, 0)] - m[(0, 1)]) / four_w,
            );
        }

        // Cyclic successors of the pivot axis.
        let (i, j, k) = (pivot, (pivot + 1) % 3, (pivot + 2) % 3);
        let four_qi = 2.0 * (1.0 + m[(i, i)] - m[(j, j)] - m[(k, k)]).sqrt();
        let mut v = Vector3::<f64>::zeros();
        v[i] = four_qi / 4.0;
        v[j] = (m[(j, i)] + m[(i, j)]) / four_qi;
        v[k] = (m[(k, i)] + m[(i, k)]) / four_qi;
        Quaternion::from_parts((m[(k, j)] - m[(j, k)]) / four_qi, &v)
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Rotate a vector: `R · v`.
    #[inline]
    pub fn apply(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * v
    }

    /// Inverse rotation. For an orthonormal matrix this is the transpose.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Check `RᵀR ≈ I` and `det R ≈ 1` within `tolerance`.
    pub fn is_valid(&self, tolerance: f64) -> bool {
        let orthogonality = (self.matrix.transpose() * self.matrix - Matrix3::identity()).amax();
        orthogonality < tolerance && (self.determinant() - 1.0).abs() < tolerance
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    #[inline]
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl Mul<Vector3<f64>> for RotationMatrix {
    type Output = Vector3<f64>;

    #[inline]
    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        self.apply(&rhs)
    }
}

impl From<RotationMatrix> for Matrix3<f64> {
    fn from(rotation: RotationMatrix) -> Self {
        rotation.matrix
    }
}

/// Rotation by `angle` radians about the z-axis.
pub fn rotation_about_z(angle: f64) -> RotationMatrix {
    let (sin, cos) = angle.sin_cos();
    RotationMatrix {
        matrix: Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0),
    }
}

/// Some rotation in SO(3) that takes the z-axis to `normalize(vector)`.
///
/// Built as `Rz(θ) · Ry(φ)`: tilt the z-axis down by the polar angle `φ`,
/// then turn it to the azimuth `θ` of the vector's xy part (`θ = 0` when that
/// part is zero). The zero vector maps to the identity.
pub fn z_to_vector(vector: &Vector3<f64>) -> RotationMatrix {
    let norm = get_norm(vector);
    if norm == 0.0 {
        debug!("z_to_vector: zero vector, returning identity");
        return RotationMatrix::identity();
    }
    let v = vector / norm;
    let phi = v.z.clamp(-1.0, 1.0).acos();

    let theta = if v.x != 0.0 || v.y != 0.0 {
        // Projection of the vector onto the unit circle
        let axis_proj = Vector2::new(v.x, v.y) / get_norm(&Vector2::new(v.x, v.y));
        let theta = axis_proj.x.clamp(-1.0, 1.0).acos();
        if axis_proj.y < 0.0 { -theta } else { theta }
    } else {
        0.0
    };

    let (sin_phi, cos_phi) = phi.sin_cos();
    let phi_down = Matrix3::new(
        cos_phi, 0.0, sin_phi, //
        0.0, 1.0, 0.0, //
        -sin_phi, 0.0, cos_phi,
    );

    RotationMatrix {
        matrix: rotation_about_z(theta).matrix * phi_down,
    }
}

/// Rotation in R³ by `angle` radians about `axis`.
///
/// `R = Z · Rz(angle) · Z⁻¹` with `Z = z_to_vector(axis)`; `Z⁻¹ = Zᵀ` since
/// `Z` is orthonormal. Matches [`rotate_vector_3d`] for any non-zero axis.
/// A zero axis degenerates to a rotation about z.
pub fn rotation_matrix(angle: f64, axis: &Vector3<f64>) -> RotationMatrix {
    let about_z = rotation_about_z(angle);
    let z_to_axis = z_to_vector(axis);
    let axis_to_z = z_to_axis.inverse();
    z_to_axis * about_z * axis_to_z
}

/// `dim × dim` band matrix: 1 where `|i − j| < thickness`, 0 elsewhere.
///
/// `thickness = 1` is the identity pattern, `2` adds the first off-diagonals.
pub fn thick_diagonal(dim: usize, thickness: usize) -> DMatrix<u8> {
    DMatrix::from_fn(dim, dim, |i, j| u8::from(i.abs_diff(j) < thickness))
}
