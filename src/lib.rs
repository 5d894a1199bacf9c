pub mod constants;
pub mod error;
pub mod logger;
pub mod space;

pub use error::{GeoError, GeoResult};
pub use logger::{init_logger, init_logger_with_level};
pub use space::projection::{
    angle_of_vector, center_of_mass, compass_directions, complex_func_to_r3_func, complex_to_r3,
    line_intersection, midpoint, project_along_vector, r3_to_complex,
};
pub use space::quaternion::{
    Quaternion, angle_axis_from_quaternion, quaternion_conjugate, quaternion_from_angle_axis,
    quaternion_mult,
};
pub use space::rotation::{
    RotationMatrix, rotate_slice, rotate_vector, rotate_vector_2d, rotate_vector_3d,
    rotation_about_z, rotation_matrix, thick_diagonal, z_to_vector,
};
pub use space::vector::{
    angle_between_vectors, cross, cross_slices, fdiv, fdiv_vec, get_norm, get_unit_normal,
    normalize,
};
pub use space::{GeoVector, XyProjection};
