//! Overlay of a polygon boundary and a polyline cutter.
//!
//! Both are split at every point they share, and the cutter is also split where it meets
//! itself. Every resulting cutter edge then lies entirely inside the polygon, entirely outside of
//! it, or along its boundary.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::shape::{Polygon, Polyline, Segment};
use crate::utils::{self, SegmentsIntersection};

/// Where an edge of a split cutter lies relative to the polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CutterEdgeLocation {
    Inside,
    Outside,
    OnBoundary,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct CutterEdge {
    /// The edge, oriented along the cutter.
    pub segment: Segment,
    pub location: CutterEdgeLocation,
}

pub(crate) struct Overlay {
    /// The polygon boundary, oriented with the polygon interior on the left of each edge.
    pub boundary: Vec<Segment>,
    pub cutter: Vec<CutterEdge>,
}

struct SplitSegment {
    segment: Segment,
    aabb: Aabb,
    cuts: Vec<(Real, Point<Real>)>,
}

impl SplitSegment {
    fn new(segment: Segment) -> Self {
        Self {
            segment,
            aabb: segment.local_aabb(),
            cuts: Vec::new(),
        }
    }

    fn add_cut(&mut self, t: Real, pt: Point<Real>) {
        self.cuts.push((t, pt));
    }

    /// The sub-segments between consecutive cuts, with their parameter ranges.
    fn pieces(&self) -> Vec<(Real, Real, Segment)> {
        let mut cuts = self.cuts.clone();
        cuts.sort_by(|x, y| x.0.total_cmp(&y.0));

        let mut pts = Vec::with_capacity(cuts.len() + 2);
        pts.push((0.0, self.segment.a));
        pts.extend(cuts);
        pts.push((1.0, self.segment.b));
        pts.dedup_by(|next, prev| next.1 == prev.1);

        pts.windows(2)
            .map(|w| (w[0].0, w[1].0, Segment::new(w[0].1, w[1].1)))
            .collect()
    }
}

impl Overlay {
    pub fn new(polygon: &Polygon, cutter: &Polyline) -> Self {
        let mut boundary = oriented_boundary(polygon);
        let mut cutter_segs: Vec<SplitSegment> = cutter
            .segments()
            .filter(|s| !s.is_degenerate())
            .map(SplitSegment::new)
            .collect();
        let mut overlaps: Vec<Vec<(Real, Real)>> = vec![Vec::new(); cutter_segs.len()];

        for edge in &mut boundary {
            for (j, cut) in cutter_segs.iter_mut().enumerate() {
                if !edge.aabb.intersects(&cut.aabb) {
                    continue;
                }

                match utils::segments_intersection2d(
                    &edge.segment.a,
                    &edge.segment.b,
                    &cut.segment.a,
                    &cut.segment.b,
                ) {
                    None => {}
                    Some(SegmentsIntersection::Point(contact)) => {
                        edge.add_cut(contact.t1, contact.point);
                        cut.add_cut(contact.t2, contact.point);
                    }
                    Some(SegmentsIntersection::Segment { first, second }) => {
                        for contact in [first, second] {
                            edge.add_cut(contact.t1, contact.point);
                            cut.add_cut(contact.t2, contact.point);
                        }
                        overlaps[j].push((first.t2.min(second.t2), first.t2.max(second.t2)));
                    }
                }
            }
        }

        for k in 1..cutter_segs.len() {
            let (head, tail) = cutter_segs.split_at_mut(k);
            let seg_k = &mut tail[0];

            for seg_j in head.iter_mut() {
                if !seg_j.aabb.intersects(&seg_k.aabb) {
                    continue;
                }

                match utils::segments_intersection2d(
                    &seg_j.segment.a,
                    &seg_j.segment.b,
                    &seg_k.segment.a,
                    &seg_k.segment.b,
                ) {
                    None => {}
                    Some(SegmentsIntersection::Point(contact)) => {
                        seg_j.add_cut(contact.t1, contact.point);
                        seg_k.add_cut(contact.t2, contact.point);
                    }
                    Some(SegmentsIntersection::Segment { first, second }) => {
                        for contact in [first, second] {
                            seg_j.add_cut(contact.t1, contact.point);
                            seg_k.add_cut(contact.t2, contact.point);
                        }
                    }
                }
            }
        }

        let rings: Vec<&[Point<Real>]> = polygon.rings().map(|ring| &ring[..]).collect();
        let mut cutter_edges = Vec::new();

        for (seg, seg_overlaps) in cutter_segs.iter().zip(overlaps.iter()) {
            for (t0, t1, segment) in seg.pieces() {
                let tm = (t0 + t1) / 2.0;
                let location = if seg_overlaps.iter().any(|(lo, hi)| *lo <= tm && tm <= *hi) {
                    CutterEdgeLocation::OnBoundary
                } else if utils::point_in_rings2d(
                    &na::center(&segment.a, &segment.b),
                    rings.iter().copied(),
                ) {
                    CutterEdgeLocation::Inside
                } else {
                    CutterEdgeLocation::Outside
                };

                cutter_edges.push(CutterEdge { segment, location });
            }
        }

        Self {
            boundary: boundary
                .iter()
                .flat_map(|edge| edge.pieces())
                .map(|(_, _, segment)| segment)
                .collect(),
            cutter: cutter_edges,
        }
    }

    /// Does the cutter have edges strictly inside and strictly outside of the polygon?
    pub fn crosses(&self) -> bool {
        let mut inside = false;
        let mut outside = false;

        for edge in &self.cutter {
            match edge.location {
                CutterEdgeLocation::Inside => inside = true,
                CutterEdgeLocation::Outside => outside = true,
                CutterEdgeLocation::OnBoundary => {}
            }
        }

        inside && outside
    }
}

// Outer rings are made counter-clockwise and holes clockwise. Zero-area rings are ignored.
fn oriented_boundary(polygon: &Polygon) -> Vec<SplitSegment> {
    let mut result = Vec::new();

    for rings in polygon.parts() {
        for (i, ring) in rings.iter().enumerate() {
            let area = utils::ring_signed_area(ring);
            if area == 0.0 {
                continue;
            }

            let reverse = (i == 0) == (area < 0.0);
            result.extend(ring.windows(2).filter(|w| w[0] != w[1]).map(|w| {
                if reverse {
                    SplitSegment::new(Segment::new(w[1], w[0]))
                } else {
                    SplitSegment::new(Segment::new(w[0], w[1]))
                }
            }));
        }
    }

    result
}
