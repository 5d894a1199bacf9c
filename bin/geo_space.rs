use clap::{Parser, Subcommand};
use geo_space::constants::{OUT, RIGHT};
use geo_space::{
    GeoError, GeoResult, Quaternion, angle_axis_from_quaternion, center_of_mass,
    compass_directions, init_logger_with_level, line_intersection, rotate_slice, rotation_matrix,
};
use nalgebra::{Vector2, Vector3};
use tracing::{Level, debug, error, info};

#[derive(Parser)]
#[command(name = "geo-space")]
#[command(about = "Evaluate geometry kernel operations from the command line")]
struct Args {
    /// Enable verbose (DEBUG) output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotate a 2D or 3D vector about an axis
    Rotate {
        /// Vector components, e.g. "1,0" or "1,0,0"
        #[arg(long, allow_hyphen_values = true)]
        vector: String,

        /// Rotation angle (radians unless --degrees)
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,

        /// Rotation axis for 3D vectors (defaults to +z)
        #[arg(long, allow_hyphen_values = true)]
        axis: Option<String>,

        /// Interpret the angle in degrees
        #[arg(long)]
        degrees: bool,
    },

    /// Print the rotation matrix for an angle and axis
    Matrix {
        /// Rotation angle (radians unless --degrees)
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,

        /// Rotation axis
        #[arg(long, allow_hyphen_values = true)]
        axis: String,

        /// Interpret the angle in degrees
        #[arg(long)]
        degrees: bool,
    },

    /// Decompose a quaternion "w,x,y,z" into angle and axis
    AngleAxis {
        #[arg(long, allow_hyphen_values = true)]
        quaternion: String,
    },

    /// Evenly spaced directions around the z-axis
    Compass {
        /// Number of directions
        #[arg(short, long, default_value = "4")]
        count: usize,

        /// Starting direction (defaults to +x)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<String>,
    },

    /// Intersect two lines given as "x1,y1,x2,y2"
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        line1: String,

        #[arg(long, allow_hyphen_values = true)]
        line2: String,
    },

    /// Center of mass of points "x,y,z;x,y,z;..."
    Center {
        #[arg(long, allow_hyphen_values = true)]
        points: String,
    },
}

fn parse_components(text: &str) -> GeoResult<Vec<f64>> {
    text.split(',')
        .map(|part| part.trim().parse::<f64>().map_err(GeoError::from))
        .collect()
}

fn parse_vector3(text: &str, what: &'static str) -> GeoResult<Vector3<f64>> {
    let components = parse_components(text)?;
    match components[..] {
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(GeoError::Dimension {
            operation: what,
            expected: "3",
            actual: components.len(),
        }),
    }
}

fn parse_line(text: &str) -> GeoResult<[Vector2<f64>; 2]> {
    let components = parse_components(text)?;
    match components[..] {
        [x1, y1, x2, y2] => Ok([Vector2::new(x1, y1), Vector2::new(x2, y2)]),
        _ => Err(GeoError::Dimension {
            operation: "intersect",
            expected: "4",
            actual: components.len(),
        }),
    }
}

fn to_radians(angle: f64, degrees: bool) -> f64 {
    if degrees { angle.to_radians() } else { angle }
}

fn run(command: Command) -> GeoResult<()> {
    match command {
        Command::Rotate {
            vector,
            angle,
            axis,
            degrees,
        } => {
            let components = parse_components(&vector)?;
            let axis = match axis {
                Some(text) => parse_vector3(&text, "rotate")?,
                None => OUT,
            };
            let angle = to_radians(angle, degrees);
            debug!("Rotating {:?} by {} rad about {:?}", components, angle, axis);
            let rotated = rotate_slice(&components, angle, &axis)?;
            info!("Rotated vector: {}", rotated);
        }
        Command::Matrix {
            angle,
            axis,
            degrees,
        } => {
            let axis = parse_vector3(&axis, "matrix")?;
            let rotation = rotation_matrix(to_radians(angle, degrees), &axis);
            info!("{}", rotation);
            debug!("det = {:.6}", rotation.determinant());
        }
        Command::AngleAxis { quaternion } => {
            let components = parse_components(&quaternion)?;
            let q = match components[..] {
                [w, x, y, z] => Quaternion::new(w, x, y, z),
                _ => {
                    return Err(GeoError::Dimension {
                        operation: "angle-axis",
                        expected: "4",
                        actual: components.len(),
                    });
                }
            };
            let (angle, axis) = angle_axis_from_quaternion(&q);
            info!(
                "angle: {:.6} rad ({:.3}°), axis: [{:.4}, {:.4}, {:.4}]",
                angle,
                angle.to_degrees(),
                axis.x,
                axis.y,
                axis.z
            );
        }
        Command::Compass { count, start } => {
            let start = match start {
                Some(text) => parse_vector3(&text, "compass")?,
                None => RIGHT,
            };
            for (k, direction) in compass_directions(count, &start).iter().enumerate() {
                info!(
                    "{k}: [{:.4}, {:.4}, {:.4}]",
                    direction.x, direction.y, direction.z
                );
            }
        }
        Command::Intersect { line1, line2 } => {
            let point = line_intersection(&parse_line(&line1)?, &parse_line(&line2)?)?;
            info!("Intersection: [{:.4}, {:.4}, {:.4}]", point.x, point.y, point.z);
        }
        Command::Center { points } => {
            let points = points
                .split(';')
                .filter(|chunk| !chunk.trim().is_empty())
                .map(|chunk| parse_vector3(chunk, "center"))
                .collect::<GeoResult<Vec<_>>>()?;
            let center = center_of_mass(&points)?;
            info!(
                "Center of mass: [{:.4}, {:.4}, {:.4}]",
                center.x, center.y, center.z
            );
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger_with_level(if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    });
    if let Err(e) = run(args.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
