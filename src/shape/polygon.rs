use crate::math::{Point, Real};
use crate::shape::Polyline;
use crate::utils;

/// A closed ring of vertices: its first and last vertices are identical.
pub type Ring = Vec<Point<Real>>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
/// A possibly multipart polygon with holes.
///
/// Each part is a list of closed rings: the first one is the outer boundary of the part, the
/// following ones are its holes. Rings are closed on construction if their last vertex differs
/// from their first one.
///
/// Two polygons are equal if they have exactly the same rings, with the same vertices, in the
/// same order. A ring starting at a different vertex does not compare equal.
pub struct Polygon {
    parts: Vec<Vec<Ring>>,
}

impl Polygon {
    /// Creates a single-part polygon from its outer ring and its holes.
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(exterior);
        rings.extend(holes);
        Self::from_parts(vec![rings])
    }

    /// Creates a multipart polygon.
    ///
    /// Empty parts are removed.
    pub fn from_parts(mut parts: Vec<Vec<Ring>>) -> Self {
        parts.retain(|rings| !rings.is_empty());
        parts.iter_mut().flatten().for_each(close_ring);
        Self { parts }
    }

    /// The parts of this polygon.
    pub fn parts(&self) -> &[Vec<Ring>] {
        &self.parts
    }

    /// Consumes this polygon and returns its parts.
    pub fn into_parts(self) -> Vec<Vec<Ring>> {
        self.parts
    }

    /// The number of parts of this polygon.
    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// An iterator through all the rings of all the parts, outer rings and holes alike.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        self.parts.iter().flatten()
    }

    /// An iterator through all the vertices of all the rings.
    pub fn vertices(&self) -> impl Iterator<Item = &Point<Real>> + '_ {
        self.rings().flatten()
    }

    /// The boundary of this polygon: one polyline part per ring, in ring order.
    pub fn boundary(&self) -> Polyline {
        Polyline::from_parts(self.rings().cloned().collect())
    }

    /// This polygon with the holes of every part removed.
    pub fn without_holes(&self) -> Polygon {
        Polygon {
            parts: self.parts.iter().map(|rings| vec![rings[0].clone()]).collect(),
        }
    }

    /// The area of this polygon: the areas of the outer rings minus the areas of the holes.
    ///
    /// Ring orientations are ignored.
    pub fn area(&self) -> Real {
        self.parts
            .iter()
            .map(|rings| {
                let outer = utils::ring_signed_area(&rings[0]).abs();
                let holes: Real = rings[1..]
                    .iter()
                    .map(|hole| utils::ring_signed_area(hole).abs())
                    .sum();
                outer - holes
            })
            .sum()
    }

    /// Does this polygon have a zero area?
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// Tests if `pt` lies strictly inside this polygon, using the even-odd rule on all its rings.
    ///
    /// Points exactly on an edge may be reported either inside or outside.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        utils::point_in_rings2d(pt, self.rings().map(|ring| &ring[..]))
    }
}

fn close_ring(ring: &mut Ring) {
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if first != last {
            ring.push(first);
        }
    }
}
