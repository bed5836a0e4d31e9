pub mod distance_2d;
pub mod intersect_2d;
pub mod orientation_2d;
pub mod polygon_2d;

/// `nalgebra` 2D point, for interop with linear-algebra consumers.
pub type Point2 = nalgebra::Point2<f64>;

/// `nalgebra` 2D vector.
pub type Vector2 = nalgebra::Vector2<f64>;
