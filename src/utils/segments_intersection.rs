use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::{orientation2d, Orientation};

/// A point shared by two segments, located along both of them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentsContact {
    /// The shared point.
    pub point: Point<Real>,
    /// The parameter of `point` along the first segment, in `[0, 1]`.
    pub t1: Real,
    /// The parameter of `point` along the second segment, in `[0, 1]`.
    pub t2: Real,
}

/// Intersection between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentsIntersection {
    /// Single point of intersection.
    Point(SegmentsContact),
    /// Intersection along a segment (when both segments are collinear).
    ///
    /// `first` and `second` are sorted by increasing parameter along the first segment. Both are
    /// vertices of the input segments.
    Segment {
        /// The start of the overlap.
        first: SegmentsContact,
        /// The end of the overlap.
        second: SegmentsContact,
    },
}

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
///
/// Orientations are compared exactly. Whenever an input vertex lies on the other segment it is
/// returned as-is instead of a recomputed point, so touching configurations never produce
/// near-duplicate vertices.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Option<SegmentsIntersection> {
    let o1 = orientation2d(a, b, c);
    let o2 = orientation2d(a, b, d);

    if o1 == Orientation::Degenerate && o2 == Orientation::Degenerate {
        return collinear_intersection(a, b, c, d);
    }

    if o1 == o2 {
        return None;
    }

    let o3 = orientation2d(c, d, a);
    let o4 = orientation2d(c, d, b);

    if o3 == o4 && o3 != Orientation::Degenerate {
        return None;
    }

    let ab = Segment::new(*a, *b);
    let cd = Segment::new(*c, *d);

    let contact = if o1 == Orientation::Degenerate {
        SegmentsContact {
            point: *c,
            t1: ab.project_parameter(c),
            t2: 0.0,
        }
    } else if o2 == Orientation::Degenerate {
        SegmentsContact {
            point: *d,
            t1: ab.project_parameter(d),
            t2: 1.0,
        }
    } else if o3 == Orientation::Degenerate {
        SegmentsContact {
            point: *a,
            t1: 0.0,
            t2: cd.project_parameter(a),
        }
    } else if o4 == Orientation::Degenerate {
        SegmentsContact {
            point: *b,
            t1: 1.0,
            t2: cd.project_parameter(b),
        }
    } else {
        let dir1 = b - a;
        let dir2 = d - c;
        let denom = dir1.perp(&dir2);
        let ac = c - a;
        let t1 = (ac.perp(&dir2) / denom).clamp(0.0, 1.0);
        let t2 = (ac.perp(&dir1) / denom).clamp(0.0, 1.0);

        SegmentsContact {
            point: ab.point_at(t1),
            t1,
            t2,
        }
    };

    Some(SegmentsIntersection::Point(contact))
}

fn collinear_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Option<SegmentsIntersection> {
    let ab = Segment::new(*a, *b);
    let cd = Segment::new(*c, *d);

    // Every vertex of one segment lying on the other is a candidate end of the overlap.
    let mut contacts: Vec<SegmentsContact> = Vec::with_capacity(4);
    if between(c, d, a) {
        contacts.push(SegmentsContact {
            point: *a,
            t1: 0.0,
            t2: cd.project_parameter(a),
        });
    }
    if between(c, d, b) {
        contacts.push(SegmentsContact {
            point: *b,
            t1: 1.0,
            t2: cd.project_parameter(b),
        });
    }
    if between(a, b, c) {
        contacts.push(SegmentsContact {
            point: *c,
            t1: ab.project_parameter(c),
            t2: 0.0,
        });
    }
    if between(a, b, d) {
        contacts.push(SegmentsContact {
            point: *d,
            t1: ab.project_parameter(d),
            t2: 1.0,
        });
    }

    let first = *contacts
        .iter()
        .min_by(|x, y| x.t1.total_cmp(&y.t1).then(x.t2.total_cmp(&y.t2)))?;
    let second = *contacts
        .iter()
        .max_by(|x, y| x.t1.total_cmp(&y.t1).then(x.t2.total_cmp(&y.t2)))?;

    if first.point == second.point {
        Some(SegmentsIntersection::Point(first))
    } else {
        Some(SegmentsIntersection::Segment { first, second })
    }
}

// Checks that `c` is in-between `a` and `b`, endpoints included.
// Assumes the three points are collinear.
fn between(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    a.x.min(b.x) <= c.x && c.x <= a.x.max(b.x) && a.y.min(b.y) <= c.y && c.y <= a.y.max(b.y)
}
