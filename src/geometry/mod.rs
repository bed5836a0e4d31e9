pub mod chain;
pub mod point;
pub mod segment;
pub mod shape;

pub use chain::{Chain, Closed, Open, Polygon, Polyline, SegmentRule};
pub use point::Point;
pub use segment::Segment;
pub use shape::{Shape, ShapeKind};
