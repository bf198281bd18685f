use crate::bounding_volume::Aabb;
use crate::shape::Segment;

impl Segment {
    /// Computes the local-space [`Aabb`] of this segment.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(self.a.inf(&self.b), self.a.sup(&self.b))
    }
}
