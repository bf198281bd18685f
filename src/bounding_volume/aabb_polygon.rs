use crate::bounding_volume::Aabb;
use crate::shape::Polygon;

impl Polygon {
    /// Computes the local-space [`Aabb`] of this polygon.
    ///
    /// Holes lie inside their outer ring so only the vertices of the outer rings are visited.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points_ref(self.parts().iter().flat_map(|rings| rings[0].iter()))
    }
}
