use crate::math::{Point, Real};

/// The orientation of an ordered triple of 2D points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The points turn counter-clockwise: `c` lies on the left of the directed line `ab`.
    Ccw,
    /// The points turn clockwise: `c` lies on the right of the directed line `ab`.
    Cw,
    /// The points are collinear.
    Degenerate,
}

impl Orientation {
    /// The orientation obtained by swapping two of the points.
    pub fn reversed(self) -> Self {
        match self {
            Self::Ccw => Self::Cw,
            Self::Cw => Self::Ccw,
            Self::Degenerate => Self::Degenerate,
        }
    }
}

/// Computes the orientation of the triple `(a, b, c)`.
///
/// The sign of the determinant is compared with an exact `0.0`: no collinearity tolerance is
/// applied.
#[inline]
pub fn orientation2d(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Orientation {
    let det = (b - a).perp(&(c - a));

    if det > 0.0 {
        Orientation::Ccw
    } else if det < 0.0 {
        Orientation::Cw
    } else {
        Orientation::Degenerate
    }
}
