use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use crate::shape::Polyline;
use crate::utils::{self, SegmentsIntersection};

/// The points shared by two polylines.
///
/// Crossings, touching endpoints, and the ends of collinear overlaps are reported once each, in
/// the order they are met walking along `a`.
pub fn polylines_intersection_points(a: &Polyline, b: &Polyline) -> Vec<Point<Real>> {
    if !a.local_aabb().intersects(&b.local_aabb()) {
        return Vec::new();
    }

    let b_segments: Vec<_> = b.segments().map(|s| (s, s.local_aabb())).collect();
    let mut result = Vec::new();

    for seg_a in a.segments() {
        let aabb_a = seg_a.local_aabb();

        for (seg_b, aabb_b) in &b_segments {
            if !aabb_a.intersects(aabb_b) {
                continue;
            }

            match utils::segments_intersection2d(&seg_a.a, &seg_a.b, &seg_b.a, &seg_b.b) {
                None => {}
                Some(SegmentsIntersection::Point(contact)) => result.push(contact.point),
                Some(SegmentsIntersection::Segment { first, second }) => {
                    result.push(first.point);
                    result.push(second.point);
                }
            }
        }
    }

    utils::dedup_unordered(result)
}
