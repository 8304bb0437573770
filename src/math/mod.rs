pub mod angle;

pub use angle::{direction, swept_angle, swept_angles};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Half-width, in degrees, of the window around 180° that marks a T-junction.
pub const DEFAULT_T_TOLERANCE_DEG: f64 = 5.0;
