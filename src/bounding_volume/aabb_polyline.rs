use crate::bounding_volume::Aabb;
use crate::shape::Polyline;

impl Polyline {
    /// Computes the local-space [`Aabb`] of this polyline.
    ///
    /// The result is invalid if the polyline has no vertex.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points_ref(self.vertices())
    }
}
