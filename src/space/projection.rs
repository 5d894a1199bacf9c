//! Projection and coordinate utilities: polar angles, plane projection,
//! centroids, compass directions, line intersection and complex ⇄ R³.

use crate::constants::{OUT, TAU};
use crate::error::{GeoError, GeoResult};
use crate::space::XyProjection;
use crate::space::rotation::rotate_vector_3d;
use nalgebra::{Complex, Matrix3, SVector, Vector2, Vector3};
use tracing::debug;

/// Polar angle `θ ∈ (-π, π]` of the vector's projection onto the xy-plane.
///
/// Returns 0 when the projection is the zero vector.
pub fn angle_of_vector<P: XyProjection + ?Sized>(vector: &P) -> f64 {
    let xy = vector.xy();
    if xy.x == 0.0 && xy.y == 0.0 {
        return 0.0;
    }
    xy.y.atan2(xy.x)
}

/// Project `point` onto the plane orthogonal to `vector`: `(I − v vᵀ) · point`.
///
/// `vector` must be unit length for the result to be an orthogonal
/// projection; this is not checked.
pub fn project_along_vector(point: &Vector3<f64>, vector: &Vector3<f64>) -> Vector3<f64> {
    let matrix = Matrix3::identity() - vector * vector.transpose();
    matrix * point
}

/// Arithmetic mean of a non-empty set of points.
///
/// # Errors
/// [`GeoError::EmptyInput`] when `points` is empty.
pub fn center_of_mass<const D: usize>(points: &[SVector<f64, D>]) -> GeoResult<SVector<f64, D>> {
    if points.is_empty() {
        debug!("center_of_mass: empty point set");
        return Err(GeoError::EmptyInput {
            operation: "center_of_mass",
        });
    }
    let sum = points
        .iter()
        .fold(SVector::<f64, D>::zeros(), |acc, point| acc + point);
    Ok(sum / points.len() as f64)
}

/// Point halfway between `point1` and `point2`.
pub fn midpoint<const D: usize>(
    point1: &SVector<f64, D>,
    point2: &SVector<f64, D>,
) -> SVector<f64, D> {
    (point1 + point2) / 2.0
}

/// `n` directions evenly spaced by `TAU / n` around `OUT`, starting at `start_vect`.
///
/// The k-th entry is `start_vect` rotated by `k · TAU / n`. `n = 0` yields an
/// empty list.
pub fn compass_directions(n: usize, start_vect: &Vector3<f64>) -> Vec<Vector3<f64>> {
    let angle = TAU / n as f64;
    (0..n)
        .map(|k| rotate_vector_3d(start_vect, k as f64 * angle, &OUT))
        .collect()
}

/// Intersection of two lines in the xy-plane, each given by two points.
///
/// Uses the determinant form of Cramer's rule and returns `(x, y, 0)`. Only
/// the xy components of the points are read.
///
/// # Errors
/// [`GeoError::ParallelLines`] when the determinant is exactly zero
/// (parallel or coincident lines).
pub fn line_intersection<P: XyProjection>(
    line1: &[P; 2],
    line2: &[P; 2],
) -> GeoResult<Vector3<f64>> {
    let (a1, a2) = (line1[0].xy(), line1[1].xy());
    let (b1, b2) = (line2[0].xy(), line2[1].xy());

    let x_diff = Vector2::new(a1.x - a2.x, b1.x - b2.x);
    let y_diff = Vector2::new(a1.y - a2.y, b1.y - b2.y);

    let div = det(&x_diff, &y_diff);
    if div == 0.0 {
        debug!("line_intersection: zero determinant");
        return Err(GeoError::ParallelLines);
    }

    let d = Vector2::new(det(&a1, &a2), det(&b1, &b2));
    let x = det(&d, &x_diff) / div;
    let y = det(&d, &y_diff) / div;
    Ok(Vector3::new(x, y, 0.0))
}

#[inline]
fn det(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Point `(re, im, 0)` for a complex number.
#[inline]
pub fn complex_to_r3(complex_num: Complex<f64>) -> Vector3<f64> {
    Vector3::new(complex_num.re, complex_num.im, 0.0)
}

/// Complex number `x + iy` from the xy components of a point.
#[inline]
pub fn r3_to_complex<P: XyProjection + ?Sized>(point: &P) -> Complex<f64> {
    let xy = point.xy();
    Complex::new(xy.x, xy.y)
}

/// Lift a map on the complex plane to a map on R³ (through the z = 0 plane).
pub fn complex_func_to_r3_func<F>(complex_func: F) -> impl Fn(&Vector3<f64>) -> Vector3<f64>
where
    F: Fn(Complex<f64>) -> Complex<f64>,
{
    move |point| complex_to_r3(complex_func(r3_to_complex(point)))
}
