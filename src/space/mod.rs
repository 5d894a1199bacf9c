//! Geometry kernel for 2D/3D vector algebra and rotations.
//!
//! This module groups the primitive operations a rendering or animation layer
//! composes:
//! - **vector**: norm, normalization with fallback, cross product, safe division, angles
//! - **quaternion**: scalar-first quaternions and the Hamilton product
//! - **rotation**: rotating vectors, rotation matrices, change of basis from the z-axis
//! - **projection**: polar angles, plane projection, centroids, line intersection,
//!   complex ⇄ R³ conversion
//!
//! Rotation representations and how they relate:
//!
//! Representation | Type              | Constraint         | Built by                      | Acts by
//! -------------- | ----------------- | ------------------ | ----------------------------- | -------------
//! Angle-axis     | (f64, Vector3)    | ‖û‖ = 1            | `angle_axis_from_quaternion`  | -
//! Unit complex   | Complex<f64>      | ‖z‖ = 1            | `e^{iθ}`                      | z·v
//! Quaternion     | `Quaternion`      | ‖q‖ = 1            | `quaternion_from_angle_axis`  | q·(0,v)·q*
//! Matrix         | `RotationMatrix`  | RᵀR = I, det R = 1 | `rotation_matrix`             | R·v
//!
//! Every function is pure: arguments are borrowed, results are new values.
//!
//! # Example
//!
//! ```
//! use geo_space::constants::{OUT, RIGHT, UP, TAU};
//! use geo_space::space::rotation::rotate_vector_3d;
//!
//! let rotated = rotate_vector_3d(&RIGHT, TAU / 4.0, &OUT);
//! assert!((rotated - UP).norm() < 1e-12);
//! ```

use crate::error::{GeoError, GeoResult};
use nalgebra::{Complex, Vector2, Vector3};
use std::fmt;

pub mod projection;
pub mod quaternion;
pub mod rotation;
pub mod vector;

/// A vector whose dimension is only known at runtime.
///
/// Used by the entry points that accept either a planar or a spatial vector
/// and dispatch on it. Everything else works on `Vector2`/`Vector3` directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeoVector {
    Planar(Vector2<f64>),
    Spatial(Vector3<f64>),
}

impl GeoVector {
    /// Number of components (2 or 3).
    pub fn dim(&self) -> usize {
        match self {
            GeoVector::Planar(_) => 2,
            GeoVector::Spatial(_) => 3,
        }
    }

    /// Components as an owned `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            GeoVector::Planar(v) => v.as_slice().to_vec(),
            GeoVector::Spatial(v) => v.as_slice().to_vec(),
        }
    }

    /// Embed into R³ (planar vectors get z = 0).
    pub fn to_spatial(&self) -> Vector3<f64> {
        match self {
            GeoVector::Planar(v) => Vector3::new(v.x, v.y, 0.0),
            GeoVector::Spatial(v) => *v,
        }
    }
}

impl TryFrom<&[f64]> for GeoVector {
    type Error = GeoError;

    fn try_from(components: &[f64]) -> GeoResult<Self> {
        match *components {
            [x, y] => Ok(GeoVector::Planar(Vector2::new(x, y))),
            [x, y, z] => Ok(GeoVector::Spatial(Vector3::new(x, y, z))),
            _ => Err(GeoError::Dimension {
                operation: "GeoVector::try_from",
                expected: "2 or 3",
                actual: components.len(),
            }),
        }
    }
}

impl From<Vector2<f64>> for GeoVector {
    fn from(v: Vector2<f64>) -> Self {
        GeoVector::Planar(v)
    }
}

impl From<Vector3<f64>> for GeoVector {
    fn from(v: Vector3<f64>) -> Self {
        GeoVector::Spatial(v)
    }
}

impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoVector::Planar(v) => write!(f, "[{:.4}, {:.4}]", v.x, v.y),
            GeoVector::Spatial(v) => write!(f, "[{:.4}, {:.4}, {:.4}]", v.x, v.y, v.z),
        }
    }
}

/// Anything with a projection onto the xy-plane.
///
/// Lets the planar utilities (`angle_of_vector`, `line_intersection`,
/// `r3_to_complex`) accept 2-vectors, 3-vectors and complex numbers alike.
pub trait XyProjection {
    fn xy(&self) -> Vector2<f64>;
}

impl XyProjection for Vector2<f64> {
    #[inline]
    fn xy(&self) -> Vector2<f64> {
        *self
    }
}

impl XyProjection for Vector3<f64> {
    #[inline]
    fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl XyProjection for Complex<f64> {
    #[inline]
    fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.re, self.im)
    }
}

impl XyProjection for GeoVector {
    fn xy(&self) -> Vector2<f64> {
        match self {
            GeoVector::Planar(v) => *v,
            GeoVector::Spatial(v) => v.xy(),
        }
    }
}
