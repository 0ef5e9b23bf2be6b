pub mod distance_2d;
pub mod vec2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Pointer hit tolerance in surface units, shared by every shape kind.
pub const HIT_TOLERANCE: f64 = 10.0;
