use crate::geometry::Shape;

/// Computes the length of a shape.
pub struct Length<'a> {
    shape: &'a Shape,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the total length.
    ///
    /// A point has length 0. A polyline sums its segments and a polygon
    /// also counts its closing edge.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.shape.get_length()
    }
}
