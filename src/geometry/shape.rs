use std::fmt;

use super::{Point, Polygon, Polyline, Segment};

/// Kind tag of a primitive, for consumers that only need to branch on
/// what a shape is without borrowing its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// A shape record not yet resolved to a concrete primitive.
    #[default]
    Generic,
    Point,
    Segment,
    LineString,
    Polygon,
}

/// Any of the kernel's primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Segment(Segment),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Shape {
    /// Returns the kind tag of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Polyline(line) => line.kind(),
            Self::Polygon(poly) => poly.kind(),
        }
    }

    /// Total length: zero for a point, the perimeter for a polygon.
    #[must_use]
    pub fn get_length(&self) -> f64 {
        match self {
            Self::Point(_) => 0.0,
            Self::Segment(s) => s.length(),
            Self::Polyline(line) => line.get_length(),
            Self::Polygon(poly) => poly.get_length(),
        }
    }

    /// Vertices of this shape in order. A segment yields its two endpoints.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Self::Point(p) => vec![*p],
            Self::Segment(s) => vec![s.p1(), s.p2()],
            Self::Polyline(line) => line.vertices().to_vec(),
            Self::Polygon(poly) => poly.vertices().to_vec(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => fmt::Display::fmt(p, f),
            Self::Segment(s) => fmt::Display::fmt(s, f),
            Self::Polyline(line) => fmt::Display::fmt(line, f),
            Self::Polygon(poly) => fmt::Display::fmt(poly, f),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Polyline> for Shape {
    fn from(line: Polyline) -> Self {
        Self::Polyline(line)
    }
}

impl From<Polygon> for Shape {
    fn from(poly: Polygon) -> Self {
        Self::Polygon(poly)
    }
}
