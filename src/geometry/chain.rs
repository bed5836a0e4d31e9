use std::fmt;
use std::marker::PhantomData;

use crate::error::{GeometryError, Result};

use super::{Point, Segment, ShapeKind};

/// How a vertex chain derives its segments from its vertices.
///
/// A rule owns both the full derivation (`build`) and the incremental
/// repairs run after a vertex is added. Every repair must leave the
/// segment list equal to what `build` would produce for the new vertices.
pub trait SegmentRule {
    /// Kind tag reported by chains using this rule.
    const KIND: ShapeKind;

    /// Whether the last vertex connects back to the first.
    const CLOSED: bool;

    /// Derives the full segment list for `vertices`.
    fn build(vertices: &[Point]) -> Vec<Segment>;

    /// Repairs `segments` after a vertex was pushed onto the end of `vertices`.
    fn repair_append(vertices: &[Point], segments: &mut Vec<Segment>);

    /// Repairs `segments` after a vertex was inserted at `index` of `vertices`.
    ///
    /// `index` is always a valid position in the updated `vertices`.
    fn repair_insert(vertices: &[Point], segments: &mut Vec<Segment>, index: usize);
}

/// Open rule: `n` vertices give `n - 1` segments, `segment[i] = (v[i], v[i+1])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Open;

/// Closed rule: `n` vertices give `n` segments forming a cycle,
/// `segment[i] = (v[i-1 mod n], v[i])`.
///
/// A single vertex yields one zero-length self-loop. This only happens while
/// a polygon is being built up vertex by vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Closed;

impl SegmentRule for Open {
    const KIND: ShapeKind = ShapeKind::LineString;
    const CLOSED: bool = false;

    fn build(vertices: &[Point]) -> Vec<Segment> {
        vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect()
    }

    fn repair_append(vertices: &[Point], segments: &mut Vec<Segment>) {
        let n = vertices.len();
        if n >= 2 {
            segments.push(Segment::new(vertices[n - 2], vertices[n - 1]));
        }
    }

    fn repair_insert(vertices: &[Point], segments: &mut Vec<Segment>, index: usize) {
        let n = vertices.len();
        if n < 2 {
            return;
        }
        if index == n - 1 {
            Self::repair_append(vertices, segments);
        } else if index == 0 {
            segments.insert(0, Segment::new(vertices[0], vertices[1]));
        } else {
            // Split the segment that used to join v[index-1] to v[index+1].
            segments[index - 1] = Segment::new(vertices[index - 1], vertices[index]);
            segments.insert(index, Segment::new(vertices[index], vertices[index + 1]));
        }
    }
}

impl SegmentRule for Closed {
    const KIND: ShapeKind = ShapeKind::Polygon;
    const CLOSED: bool = true;

    fn build(vertices: &[Point]) -> Vec<Segment> {
        let n = vertices.len();
        (0..n)
            .map(|i| Segment::new(vertices[(i + n - 1) % n], vertices[i]))
            .collect()
    }

    fn repair_append(vertices: &[Point], segments: &mut Vec<Segment>) {
        let n = vertices.len();
        match n {
            0 => {}
            1 => segments.push(Segment::new(vertices[0], vertices[0])),
            _ => {
                // The old closing edge now runs from the new last vertex,
                // and the previous last vertex gains an interior edge.
                segments[0] = Segment::new(vertices[n - 1], vertices[0]);
                segments.push(Segment::new(vertices[n - 2], vertices[n - 1]));
            }
        }
    }

    fn repair_insert(vertices: &[Point], segments: &mut Vec<Segment>, index: usize) {
        let n = vertices.len();
        if index + 1 >= n {
            Self::repair_append(vertices, segments);
            return;
        }
        let prev = vertices[(index + n - 1) % n];
        segments[index] = Segment::new(prev, vertices[index]);
        segments.insert(index + 1, Segment::new(vertices[index], vertices[index + 1]));
    }
}

/// An ordered vertex sequence plus the segments derived from it.
///
/// The segment list is a cache of `R::build(vertices)`. Both lists are
/// private and every mutator repairs the cache before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<R> {
    vertices: Vec<Point>,
    segments: Vec<Segment>,
    rule: PhantomData<R>,
}

/// An open path through its vertices.
pub type Polyline = Chain<Open>;

/// A closed ring through its vertices.
pub type Polygon = Chain<Closed>;

impl<R: SegmentRule> Chain<R> {
    /// Creates a chain from an initial, possibly empty, vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        let segments = R::build(&vertices);
        Self {
            vertices,
            segments,
            rule: PhantomData,
        }
    }

    /// The vertices in path order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The segments derived from the vertices.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        R::CLOSED
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        R::KIND
    }

    /// Appends `vertex` to the end of the chain. Amortized O(1).
    pub fn append_vertex(&mut self, vertex: Point) {
        self.vertices.push(vertex);
        R::repair_append(&self.vertices, &mut self.segments);
        tracing::trace!(
            kind = ?R::KIND,
            vertices = self.vertices.len(),
            segments = self.segments.len(),
            "appended vertex"
        );
    }

    /// Inserts `vertex` at `index`, shifting later vertices up by one.
    ///
    /// `index == vertex_count()` behaves like [`Self::append_vertex`]. At
    /// index 0 of an open chain a new first segment is added; nothing is
    /// split. For a closed chain index 0 splits the closing segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if `index > vertex_count()`.
    /// The chain is left unchanged in that case.
    pub fn insert_vertex(&mut self, vertex: Point, index: usize) -> Result<()> {
        let len = self.vertices.len();
        if index > len {
            tracing::debug!(index, len, "rejected vertex insertion");
            return Err(GeometryError::IndexOutOfRange { index, len }.into());
        }
        self.vertices.insert(index, vertex);
        R::repair_insert(&self.vertices, &mut self.segments, index);
        tracing::trace!(
            kind = ?R::KIND,
            index,
            vertices = self.vertices.len(),
            segments = self.segments.len(),
            "inserted vertex"
        );
        Ok(())
    }

    /// Sum of all segment lengths. For a polygon this includes the closing edge.
    #[must_use]
    pub fn get_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}

impl<R: SegmentRule> Default for Chain<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: SegmentRule> FromIterator<Point> for Chain<R> {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: SegmentRule> fmt::Display for Chain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{v}")?;
        }
        if R::CLOSED {
            if let Some(first) = self.vertices.first() {
                write!(f, "-{first}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanegeoError;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn assert_consistent<R: SegmentRule>(chain: &Chain<R>) {
        assert_eq!(chain.segments(), R::build(chain.vertices()).as_slice());
    }

    // ── Polyline ──

    #[test]
    fn polyline_from_vertices() {
        let line = Polyline::new(vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)]);
        assert_eq!(line.segment_count(), 2);
        assert_eq!(line.segments()[0], Segment::new(p(0.0, 0.0), p(3.0, 0.0)));
        assert_eq!(line.segments()[1], Segment::new(p(3.0, 0.0), p(3.0, 4.0)));
        assert_eq!(line.kind(), ShapeKind::LineString);
        assert!(!line.is_closed());
    }

    #[test]
    fn polyline_empty_and_single() {
        let mut line = Polyline::default();
        assert!(line.is_empty());
        assert_eq!(line.segment_count(), 0);
        line.append_vertex(p(1.0, 1.0));
        assert_eq!(line.segment_count(), 0);
        assert_relative_eq!(line.get_length(), 0.0);
    }

    #[test]
    fn polyline_append() {
        let mut line = Polyline::default();
        line.append_vertex(p(0.0, 0.0));
        line.append_vertex(p(3.0, 0.0));
        line.append_vertex(p(3.0, 4.0));
        assert_eq!(line.segment_count(), 2);
        assert_eq!(line.segments()[1], Segment::new(p(3.0, 0.0), p(3.0, 4.0)));
        assert_consistent(&line);
    }

    #[test]
    fn polyline_length() {
        let line = Polyline::new(vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)]);
        assert_relative_eq!(line.get_length(), 7.0);
    }

    #[test]
    fn polyline_insert_middle_splits_segment() {
        let mut line = Polyline::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]);
        line.insert_vertex(p(1.0, 1.0), 1).unwrap();
        assert_eq!(line.vertex_count(), 4);
        assert_eq!(line.segment_count(), 3);
        assert_eq!(line.segments()[0], Segment::new(p(0.0, 0.0), p(1.0, 1.0)));
        assert_eq!(line.segments()[1], Segment::new(p(1.0, 1.0), p(2.0, 0.0)));
        assert_consistent(&line);
    }

    #[test]
    fn polyline_insert_at_front() {
        let mut line = Polyline::new(vec![p(1.0, 0.0), p(2.0, 0.0)]);
        line.insert_vertex(p(0.0, 0.0), 0).unwrap();
        assert_eq!(line.vertices()[0], p(0.0, 0.0));
        assert_eq!(line.segments()[0], Segment::new(p(0.0, 0.0), p(1.0, 0.0)));
        assert_consistent(&line);
    }

    #[test]
    fn polyline_insert_at_end_behaves_like_append() {
        let mut inserted = Polyline::new(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        let mut appended = inserted.clone();
        inserted.insert_vertex(p(1.0, 1.0), 2).unwrap();
        appended.append_vertex(p(1.0, 1.0));
        assert_eq!(inserted, appended);
    }

    #[test]
    fn polyline_insert_into_empty_and_single() {
        let mut line = Polyline::default();
        line.insert_vertex(p(1.0, 0.0), 0).unwrap();
        assert_eq!(line.segment_count(), 0);
        line.insert_vertex(p(0.0, 0.0), 0).unwrap();
        assert_eq!(line.segment_count(), 1);
        assert_consistent(&line);
    }

    #[test]
    fn polyline_insert_out_of_range() {
        let mut line = Polyline::new(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        let before = line.clone();
        let err = line.insert_vertex(p(5.0, 5.0), 3).unwrap_err();
        assert!(matches!(
            err,
            PlanegeoError::Geometry(GeometryError::IndexOutOfRange { index: 3, len: 2 })
        ));
        assert_eq!(line, before);
    }

    #[test]
    fn polyline_display() {
        let line = Polyline::new(vec![p(0.0, 0.0), p(1.0, 2.0)]);
        assert_eq!(line.to_string(), "(0, 0)-(1, 2)");
    }

    // ── Polygon ──

    #[test]
    fn polygon_from_vertices_is_cyclic() {
        let poly = Polygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]);
        assert_eq!(poly.segment_count(), 3);
        assert_eq!(poly.segments()[0], Segment::new(p(2.0, 2.0), p(0.0, 0.0)));
        assert_eq!(poly.segments()[1], Segment::new(p(0.0, 0.0), p(2.0, 0.0)));
        assert_eq!(poly.segments()[2], Segment::new(p(2.0, 0.0), p(2.0, 2.0)));
        assert_eq!(poly.kind(), ShapeKind::Polygon);
        assert!(poly.is_closed());
    }

    #[test]
    fn polygon_incremental_construction() {
        let mut poly = Polygon::default();
        assert_eq!(poly.segment_count(), 0);

        poly.append_vertex(p(0.0, 0.0));
        assert_eq!(poly.segments(), &[Segment::new(p(0.0, 0.0), p(0.0, 0.0))]);
        assert_relative_eq!(poly.get_length(), 0.0);

        poly.append_vertex(p(2.0, 0.0));
        poly.append_vertex(p(2.0, 2.0));
        poly.append_vertex(p(0.0, 2.0));
        assert_eq!(poly.segment_count(), 4);
        assert_consistent(&poly);
        assert_eq!(poly, Polygon::new(poly.vertices().to_vec()));
    }

    #[test]
    fn polygon_perimeter() {
        let poly = Polygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
        assert_relative_eq!(poly.get_length(), 8.0);
    }

    #[test]
    fn polygon_insert_middle() {
        let mut poly = Polygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]);
        poly.insert_vertex(p(1.0, -1.0), 1).unwrap();
        assert_eq!(poly.vertices()[1], p(1.0, -1.0));
        assert_eq!(poly.segments()[1], Segment::new(p(0.0, 0.0), p(1.0, -1.0)));
        assert_eq!(poly.segments()[2], Segment::new(p(1.0, -1.0), p(2.0, 0.0)));
        assert_consistent(&poly);
    }

    #[test]
    fn polygon_insert_at_front_splits_closing_edge() {
        let mut poly = Polygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]);
        poly.insert_vertex(p(-1.0, 1.0), 0).unwrap();
        assert_eq!(poly.segments()[0], Segment::new(p(2.0, 2.0), p(-1.0, 1.0)));
        assert_eq!(poly.segments()[1], Segment::new(p(-1.0, 1.0), p(0.0, 0.0)));
        assert_consistent(&poly);
    }

    #[test]
    fn polygon_insert_every_position() {
        let base = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        for index in 0..=base.len() {
            let mut poly = Polygon::new(base.clone());
            poly.insert_vertex(p(9.0, 9.0), index).unwrap();
            assert_eq!(poly.vertices()[index], p(9.0, 9.0));
            assert_consistent(&poly);
        }
    }

    #[test]
    fn polygon_insert_into_empty_and_single() {
        let mut poly = Polygon::default();
        poly.insert_vertex(p(1.0, 1.0), 0).unwrap();
        assert_consistent(&poly);
        poly.insert_vertex(p(0.0, 0.0), 0).unwrap();
        assert_eq!(poly.segment_count(), 2);
        assert_consistent(&poly);
    }

    #[test]
    fn polygon_display_repeats_first_vertex() {
        let poly = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        assert_eq!(poly.to_string(), "(0, 0)-(1, 0)-(1, 1)-(0, 0)");
        assert_eq!(Polygon::default().to_string(), "");
    }

    #[test]
    fn collect_from_iterator() {
        let line: Polyline = [p(0.0, 0.0), p(1.0, 0.0)].into_iter().collect();
        assert_eq!(line.segment_count(), 1);
    }
}
