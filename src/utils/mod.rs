//! Various unsorted geometrical and logical operators.

pub use self::dedup::dedup_unordered;
pub use self::orientation2d::{orientation2d, Orientation};
pub use self::point_in_poly2d::{point_in_poly2d, point_in_rings2d};
pub use self::point_key::{point_key, PointKey};
pub use self::ring::{canonical_ring, open_ring, ring_signed_area};
pub use self::segments_intersection::{
    segments_intersection2d, SegmentsContact, SegmentsIntersection,
};
pub(crate) use self::spade::IndexedSite;
pub use self::spade::{sanitize_spade_coord, sanitize_spade_point};

mod dedup;
mod orientation2d;
mod point_in_poly2d;
mod point_key;
mod ring;
mod segments_intersection;
mod spade;
