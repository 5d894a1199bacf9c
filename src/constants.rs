//! Named scalars and unit vectors shared by every caller of the kernel.
//!
//! Screen-space convention: `UP`/`DOWN` run along y, `LEFT`/`RIGHT` along x,
//! and `OUT` points toward the viewer along +z (`IN` away from it).

use nalgebra::Vector3;

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;

pub const ORIGIN: Vector3<f64> = Vector3::new(0.0, 0.0, 0.0);
pub const UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);
pub const DOWN: Vector3<f64> = Vector3::new(0.0, -1.0, 0.0);
pub const RIGHT: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
pub const LEFT: Vector3<f64> = Vector3::new(-1.0, 0.0, 0.0);
pub const IN: Vector3<f64> = Vector3::new(0.0, 0.0, -1.0);
pub const OUT: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);

pub const X_AXIS: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
pub const Y_AXIS: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);
pub const Z_AXIS: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);
