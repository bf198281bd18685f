use crate::math::{Point, Real, Vector};
use crate::query::{segment_contains_point, SplitResult};
use crate::shape::{Polyline, Segment};
use crate::utils::{self, SegmentsIntersection};

impl Polyline {
    /// Cuts this polyline at the point `pt`.
    ///
    /// The polyline is cut where it crosses a small segment straddling `pt`, going from
    /// `pt + (offset, offset)` to `pt - (offset, offset)`. When the crossed polyline segment
    /// contains `pt` itself, the cut happens exactly at `pt`. Walking along the polyline, every
    /// crossing flips the side the following vertices belong to; parts of a multipart polyline
    /// are walked one after the other without flipping. Polyline segments collinear with the
    /// straddling segment are not cut.
    ///
    /// # Result
    /// The first polyline gathers the pieces before the first crossing and every other piece
    /// after it, the second polyline gathers the remaining ones. Pieces may have a zero length,
    /// e.g., when the cut happens at the first or last vertex. Returns [`SplitResult::Left`] if
    /// the polyline is not cut.
    pub fn split_at_point(&self, pt: &Point<Real>, straddle_offset: Real) -> SplitResult<Polyline> {
        let offset = Vector::repeat(straddle_offset);
        let straddle = Segment::new(pt + offset, pt - offset);
        let straddle_aabb = straddle.local_aabb();

        let mut sides: [Vec<Vec<Point<Real>>>; 2] = [Vec::new(), Vec::new()];
        let mut side = 0;
        let mut num_cuts = 0;

        for part in self.parts() {
            let Some(first) = part.first() else {
                continue;
            };

            let mut current = vec![*first];
            let mut last_cut = None;

            for w in part.windows(2) {
                let segment = Segment::new(w[0], w[1]);

                if segment.local_aabb().intersection(&straddle_aabb).is_some() {
                    if let Some(SegmentsIntersection::Point(contact)) = utils::segments_intersection2d(
                        &segment.a,
                        &segment.b,
                        &straddle.a,
                        &straddle.b,
                    ) {
                        let cut = if segment_contains_point(&segment, pt) {
                            *pt
                        } else {
                            contact.point
                        };

                        // The same crossing is seen twice when it happens at a vertex.
                        if last_cut != Some(cut) || current.len() > 1 {
                            push_vertex(&mut current, cut);
                            sides[side].push(current);
                            current = vec![cut];
                            side = 1 - side;
                            last_cut = Some(cut);
                            num_cuts += 1;
                        }
                    }
                }

                push_vertex(&mut current, segment.b);
            }

            sides[side].push(current);
        }

        if num_cuts == 0 {
            return SplitResult::Left;
        }

        let [first, second] = sides;
        if second.is_empty() {
            SplitResult::Left
        } else {
            SplitResult::Pair(Polyline::from_parts(first), Polyline::from_parts(second))
        }
    }
}

fn push_vertex(part: &mut Vec<Point<Real>>, pt: Point<Real>) {
    if part.last() != Some(&pt) {
        part.push(pt);
    }
}
