//! Scalar-first quaternions and the rotation primitives built on them.
//!
//! A quaternion is stored as `(w, x, y, z)` = `w + xi + yj + zk`. Unlike a
//! dedicated unit-quaternion type, values here are NOT normalized on
//! construction: the sandwich product `q · (0, v) · q*` multiplies a pure
//! (non-unit) quaternion, and the Hamilton product must be exact.
//!
//! A quaternion represents a rotation when it has unit norm. The one built by
//! [`quaternion_from_angle_axis`] from a non-zero axis satisfies
//! `w = cos(θ/2)` and `(x, y, z) = sin(θ/2)·û`.
//!
//! # Examples
//!
//! ```
//! use geo_space::constants::{PI, Z_AXIS};
//! use geo_space::space::quaternion::{angle_axis_from_quaternion, quaternion_from_angle_axis};
//!
//! let q = quaternion_from_angle_axis(PI / 2.0, &Z_AXIS);
//! let (angle, axis) = angle_axis_from_quaternion(&q);
//! assert!((angle - PI / 2.0).abs() < 1e-12);
//! assert!((axis - Z_AXIS).norm() < 1e-12);
//! ```

use crate::constants::{TAU, X_AXIS};
use crate::space::vector::normalize;
use nalgebra::{Vector3, Vector4};
use std::fmt;
use std::ops::Mul;
use tracing::debug;

/// A quaternion `w + xi + yj + zk`.
///
/// Storage is a 4-element column vector `[w, x, y, z]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    data: Vector4<f64>,
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w: {:.4}, x: {:.4}, y: {:.4}, z: {:.4})",
            self.w(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}

impl Quaternion {
    /// Create a quaternion from components w, x, y, z (no normalization).
    ///
    /// # Arguments
    /// * `w` - Real (scalar) part
    /// * `x` - i component
    /// * `y` - j component
    /// * `z` - k component
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            data: Vector4::new(w, x, y, z),
        }
    }

    /// Create from a scalar part and a vector part.
    #[inline]
    pub fn from_parts(w: f64, vector: &Vector3<f64>) -> Self {
        Self::new(w, vector.x, vector.y, vector.z)
    }

    /// Pure quaternion `(0, v)` used to embed a 3-vector in the sandwich product.
    #[inline]
    pub fn pure(vector: &Vector3<f64>) -> Self {
        Self::from_parts(0.0, vector)
    }

    /// The identity rotation (w=1, x=y=z=0).
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Get the scalar (real) component w.
    #[inline]
    pub fn w(&self) -> f64 {
        self.data[0]
    }

    /// Get the i component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.data[1]
    }

    /// Get the j component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.data[2]
    }

    /// Get the k component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vector3<f64> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Get all components as an array [w, x, y, z].
    #[inline]
    pub fn coords(&self) -> [f64; 4] {
        [self.w(), self.x(), self.y(), self.z()]
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.data.norm_squared()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.data.norm()
    }

    /// Compute the conjugate of the quaternion: w - xi - yj - zk.
    ///
    /// For unit quaternions, the conjugate equals the inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w(), -self.x(), -self.y(), -self.z())
    }

    /// Multiplicative inverse `q* / ‖q‖²`, `None` for the zero quaternion.
    pub fn try_inverse(&self) -> Option<Self> {
        let norm_sq = self.norm_squared();
        if norm_sq == 0.0 {
            return None;
        }
        let conj = self.conjugate();
        Some(Self {
            data: conj.data / norm_sq,
        })
    }

    /// Hamilton product `self · other`.
    ///
    /// For q1 = w1 + x1*i + y1*j + z1*k and q2 = w2 + x2*i + y2*j + z2*k:
    /// q1 * q2 = (w1*w2 - x1*x2 - y1*y2 - z1*z2) +
    ///           (w1*x2 + x1*w2 + y1*z2 - z1*y2)*i +
    ///           (w1*y2 + y1*w2 + z1*x2 - x1*z2)*j +
    ///           (w1*z2 + z1*w2 + x1*y2 - y1*x2)*k
    pub fn multiply(&self, other: &Self) -> Self {
        let [w1, x1, y1, z1] = self.coords();
        let [w2, x2, y2, z2] = other.coords();

        Self::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 + y1 * w2 + z1 * x2 - x1 * z2,
            w1 * z2 + z1 * w2 + x1 * y2 - y1 * x2,
        )
    }

    /// Compute the dot product with another quaternion.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.data.dot(&other.data)
    }

    /// Check if this is approximately equal to another quaternion.
    ///
    /// Accounts for quaternion double-cover (q and -q represent the same rotation).
    pub fn is_approx(&self, other: &Self, tolerance: f64) -> bool {
        let same = (self.data - other.data).amax() < tolerance;
        let negated = (self.data + other.data).amax() < tolerance;
        same || negated
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(&rhs)
    }
}

impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.multiply(rhs)
    }
}

/// Rotation quaternion for `angle` radians about `axis`.
///
/// Returns `(cos(angle/2), sin(angle/2)·normalize(axis))`. A zero axis is a
/// caller error: it normalizes to the zero vector, leaving only the scalar part.
pub fn quaternion_from_angle_axis(angle: f64, axis: &Vector3<f64>) -> Quaternion {
    let unit_axis = normalize(axis, None);
    if unit_axis == Vector3::zeros() {
        debug!("quaternion_from_angle_axis: zero rotation axis, vector part is zero");
    }
    let half_angle = angle * 0.5;
    Quaternion::from_parts(half_angle.cos(), &(unit_axis * half_angle.sin()))
}

/// Hamilton product `q1 · q2`. Associative, not commutative.
#[inline]
pub fn quaternion_mult(q1: &Quaternion, q2: &Quaternion) -> Quaternion {
    q1.multiply(q2)
}

/// Negate the vector part, keep the scalar part.
#[inline]
pub fn quaternion_conjugate(q: &Quaternion) -> Quaternion {
    q.conjugate()
}

/// Decompose a rotation quaternion into `(angle, axis)`.
///
/// `angle = 2·acos(w)` and `axis = normalize((x, y, z))`, falling back to
/// `X_AXIS` for the identity. `w` is clamped to `[-1, 1]` first so a unit
/// quaternion carrying rounding error cannot produce NaN.
///
/// Angles above π are folded to `TAU − angle` so the result lies in `[0, π]`.
/// The axis is NOT negated when folding: for a quaternion with `w < 0` the
/// returned pair describes the rotation in the opposite direction. Callers
/// that need an exact inverse of [`quaternion_from_angle_axis`] for angles in
/// `(π, 2π)` must negate the axis themselves.
pub fn angle_axis_from_quaternion(q: &Quaternion) -> (f64, Vector3<f64>) {
    let axis = normalize(&q.vector(), Some(X_AXIS));
    let mut angle = 2.0 * q.w().clamp(-1.0, 1.0).acos();
    if angle > TAU / 2.0 {
        angle = TAU - angle;
    }
    (angle, axis)
}

// ============================================================================
// Tests
// ============================================================================
