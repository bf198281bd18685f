//! Tessellation and clipping of point sets and polygons.

pub use self::convex_hull2::convex_hull;
pub use self::polygon_intersection::{clip_polygon_to_aabb, convex_polygons_intersection_points};
pub use self::voronoi::{
    tessellate, tessellate_with_options, TessellationOptions, VoronoiCell, VoronoiTessellator,
};

mod convex_hull2;
mod polygon_intersection;
mod voronoi;
