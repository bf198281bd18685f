//! Thiessen (Voronoi) tessellation of point sets.

use spade::{DelaunayTriangulation, Triangulation};

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Polygon;
use crate::transformation::clip_polygon_to_aabb;
use crate::utils::{self, IndexedSite};

/// Options of a Voronoi tessellation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TessellationOptions {
    /// How far the four extra corner sites are placed from the input bounding box, as a
    /// fraction of its width and height.
    pub corner_expansion: Real,
    /// How much the input bounding box is grown on each side to obtain the clipping box, as a
    /// fraction of its width and height.
    pub clip_expansion: Real,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            corner_expansion: 1.0,
            clip_expansion: 0.1,
        }
    }
}

/// A bounded Voronoi cell, clipped to the tessellation extents.
#[derive(Clone, Debug, PartialEq)]
pub struct VoronoiCell {
    /// The index, in the input slice, of the point generating this cell.
    pub site: usize,
    /// The clipped cell, with a single counter-clockwise ring.
    pub polygon: Polygon,
}

/// Builds clipped Voronoi tessellations.
///
/// Four corner sites are added around the input points so that every input point gets a
/// bounded cell, then the cells of the input points are clipped to their bounding box grown by
/// [`TessellationOptions::clip_expansion`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VoronoiTessellator {
    /// The options of this tessellator.
    pub options: TessellationOptions,
}

impl VoronoiTessellator {
    /// Creates a tessellator with the given options.
    pub fn new(options: TessellationOptions) -> Self {
        Self { options }
    }

    /// The clipped Voronoi polygons of `points`.
    ///
    /// Returns an empty vector if fewer than two points are given.
    pub fn tessellate(&self, points: &[Point<Real>]) -> Vec<Polygon> {
        self.tessellate_cells(points)
            .into_iter()
            .map(|cell| cell.polygon)
            .collect()
    }

    /// The clipped Voronoi cells of `points`, sorted by the index of their generating point.
    ///
    /// Non-finite points are skipped. Duplicate points are merged: only the first one gets a
    /// cell. Cells clipped to a zero area (e.g. when all the points are aligned with an axis) are
    /// dropped.
    pub fn tessellate_cells(&self, points: &[Point<Real>]) -> Vec<VoronoiCell> {
        let valid: Vec<(usize, &Point<Real>)> = points
            .iter()
            .enumerate()
            .filter(|(i, pt)| {
                let finite = pt.x.is_finite() && pt.y.is_finite();
                if !finite {
                    log::warn!("Skipped the non-finite point {} at {:?}.", i, pt);
                }
                finite
            })
            .collect();

        if valid.len() < 2 {
            log::info!(
                "Not enough points for a tessellation ({} given).",
                valid.len()
            );
            return Vec::new();
        }

        let extents = Aabb::from_points(valid.iter().map(|(_, pt)| **pt));
        let delta = extents.extents() * self.options.corner_expansion;
        let corners = [
            Point::new(extents.maxs.x + delta.x, extents.maxs.y + delta.y),
            Point::new(extents.maxs.x + delta.x, extents.mins.y - delta.y),
            Point::new(extents.mins.x - delta.x, extents.maxs.y + delta.y),
            Point::new(extents.mins.x - delta.x, extents.mins.y - delta.y),
        ];

        let mut triangulation = DelaunayTriangulation::<IndexedSite>::new();
        // The corner sites have no index.
        let sites = valid
            .iter()
            .map(|(i, pt)| (Some(*i), **pt))
            .chain(corners.iter().map(|pt| (None, *pt)));

        for (index, pt) in sites {
            let position = utils::sanitize_spade_point(&pt);

            if triangulation.locate_vertex(position).is_some() {
                log::debug!("Merged the duplicate point {:?} at {:?}.", index, pt);
                continue;
            }

            if let Err(err) = triangulation.insert(IndexedSite { position, index }) {
                log::warn!("Point {:?} at {:?} was rejected: {:?}", index, pt, err);
            }
        }

        let clip_box = extents.expanded_by_fraction(self.options.clip_expansion);
        let mut cells = Vec::new();

        for face in triangulation.voronoi_faces() {
            let Some(site) = face.as_delaunay_vertex().data().index else {
                continue;
            };

            let Some(mut ring) = face
                .adjacent_edges()
                .map(|edge| edge.from().position().map(|pt| Point::new(pt.x, pt.y)))
                .collect::<Option<Vec<_>>>()
            else {
                // Unbounded cell.
                continue;
            };

            ring.dedup();
            while ring.len() > 1 && ring.first() == ring.last() {
                let _ = ring.pop();
            }

            if ring.len() < 3 {
                continue;
            }

            if utils::ring_signed_area(&ring) < 0.0 {
                ring.reverse();
            }

            let clipped = clip_polygon_to_aabb(&ring, &clip_box);

            if clipped.len() < 3 || utils::ring_signed_area(&clipped) <= 0.0 {
                log::debug!("Dropped the degenerate cell of point {}.", site);
                continue;
            }

            cells.push(VoronoiCell {
                site,
                polygon: Polygon::new(clipped, Vec::new()),
            });
        }

        cells.sort_by_key(|cell| cell.site);
        cells
    }
}

/// The clipped Voronoi polygons of `points`, with the default options.
///
/// # Example
///
/// ```
/// use geosplit2d::math::Point;
/// use geosplit2d::tessellate;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 1.0),
///     Point::new(1.0, 3.0),
/// ];
///
/// assert_eq!(tessellate(&points).len(), 3);
/// assert!(tessellate(&points[..1]).is_empty());
/// ```
pub fn tessellate(points: &[Point<Real>]) -> Vec<Polygon> {
    VoronoiTessellator::default().tessellate(points)
}

/// The clipped Voronoi polygons of `points`, with explicit options.
pub fn tessellate_with_options(points: &[Point<Real>], options: TessellationOptions) -> Vec<Polygon> {
    VoronoiTessellator::new(options).tessellate(points)
}
