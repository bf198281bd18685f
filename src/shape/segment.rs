//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};

/// A segment shape.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }
}

impl Segment {
    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Is this segment reduced to a single point?
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Computes the point at the parameter `t`, i.e., `a + (b - a) * t`.
    ///
    /// The exact endpoints are returned for `t = 0` and `t = 1`.
    pub fn point_at(&self, t: Real) -> Point<Real> {
        if t == 0.0 {
            self.a
        } else if t == 1.0 {
            self.b
        } else {
            self.a + self.scaled_direction() * t
        }
    }

    /// The parameter of the orthogonal projection of `pt` on the line supporting this segment.
    ///
    /// Returns `0.0` for a degenerate segment.
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        if *pt == self.a {
            return 0.0;
        }
        if *pt == self.b {
            return 1.0;
        }

        let dir = self.scaled_direction();
        let sq_len = dir.norm_squared();

        if sq_len == 0.0 {
            0.0
        } else {
            (pt - self.a).dot(&dir) / sq_len
        }
    }
}
