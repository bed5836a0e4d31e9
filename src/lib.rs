//! A 2D planar vector-geometry kernel.
//!
//! [`geometry`] holds the primitives: points, directed segments, and vertex
//! chains (open [`Polyline`]s and closed [`Polygon`]s) that keep their
//! segment list in step with their vertex list. [`math`] holds the
//! stateless predicates built on them.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanegeoError, Result};
pub use geometry::{Point, Polygon, Polyline, Segment, Shape, ShapeKind};
pub use math::distance_2d::distance;
pub use math::intersect_2d::intersects;
pub use math::orientation_2d::{orientation, Orientation};
pub use math::polygon_2d::point_in_polygon;
