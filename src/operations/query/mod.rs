mod area;
mod distance;
mod length;

pub use area::Area;
pub use distance::PointSegmentDistance;
pub use length::Length;
