use crate::math::{Point, Real};
use crate::shape::Segment;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
/// A possibly multipart polyline.
///
/// Each part is an ordered list of vertices. Parts with fewer than two vertices, or with all
/// their vertices at the same location, have a zero length: they are valid values (a failed cut
/// may produce them) but are reported as degenerate.
///
/// Two polylines are equal if their parts have exactly the same vertices in the same order.
pub struct Polyline {
    parts: Vec<Vec<Point<Real>>>,
}

impl Polyline {
    /// Creates a single-part polyline from its vertices.
    pub fn new(vertices: Vec<Point<Real>>) -> Self {
        Self {
            parts: vec![vertices],
        }
    }

    /// Creates a multipart polyline.
    pub fn from_parts(parts: Vec<Vec<Point<Real>>>) -> Self {
        Self { parts }
    }

    /// The parts of this polyline.
    pub fn parts(&self) -> &[Vec<Point<Real>>] {
        &self.parts
    }

    /// Consumes this polyline and returns its parts.
    pub fn into_parts(self) -> Vec<Vec<Point<Real>>> {
        self.parts
    }

    /// The number of parts of this polyline.
    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// An iterator through all the vertices of all the parts.
    pub fn vertices(&self) -> impl Iterator<Item = &Point<Real>> + '_ {
        self.parts.iter().flatten()
    }

    /// An iterator through all the segments of all the parts.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.parts
            .iter()
            .flat_map(|part| part.windows(2).map(|w| Segment::new(w[0], w[1])))
    }

    /// The total length of this polyline.
    pub fn length(&self) -> Real {
        self.segments().map(|s| s.length()).sum()
    }

    /// Does this polyline have a zero length?
    pub fn is_degenerate(&self) -> bool {
        self.segments().all(|s| s.is_degenerate())
    }

    /// The distance from the start of this polyline to the first location of `pt` on it,
    /// measured along the polyline.
    ///
    /// Parts are measured one after the other. Returns `None` if `pt` does not lie on this
    /// polyline.
    pub fn distance_along(&self, pt: &Point<Real>) -> Option<Real> {
        let mut traveled = 0.0;

        for segment in self.segments() {
            if crate::query::segment_contains_point(&segment, pt) {
                return Some(traveled + (pt - segment.a).norm());
            }

            traveled += segment.length();
        }

        None
    }
}
