use core::cmp::Ordering;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use crate::query::split::{CutterEdgeLocation, Overlay};
use crate::query::SplitResult;
use crate::shape::{Polygon, Polyline, Ring, Segment};
use crate::utils::{self, PointKey};

impl Polygon {
    /// Cuts this polygon along `cutter`.
    ///
    /// The polygon boundary and the portions of the cutter lying inside the polygon are
    /// assembled into a planar graph. Dangling cutter ends are pruned, and every bounded face
    /// inside the polygon becomes a piece. A piece lies on the left of the cutter if the first
    /// cutter edge found on its boundary is traversed along the cutter direction, on its right
    /// otherwise. Pieces the cutter never reaches lie on the left.
    ///
    /// Holes not connected to the cutter are re-attached to the smallest face enclosing them.
    ///
    /// # Result
    /// The pieces are emitted in canonical form: outer rings counter-clockwise, holes clockwise,
    /// every ring starting at its lexicographically smallest vertex, and parts sorted. Returns
    /// [`SplitResult::Left`] if nothing lies on the right side, and [`SplitResult::Right`] if
    /// nothing lies on the left side.
    pub fn split_by_polyline(&self, cutter: &Polyline) -> SplitResult<Polygon> {
        if !self.local_aabb().intersects(&cutter.local_aabb()) {
            return SplitResult::Left;
        }

        let overlay = Overlay::new(self, cutter);
        let mut graph = PlanarGraph::default();

        for segment in &overlay.boundary {
            graph.add_edge(segment, EdgeKind::Boundary);
        }

        for edge in &overlay.cutter {
            if edge.location == CutterEdgeLocation::Inside {
                graph.add_edge(&edge.segment, EdgeKind::Cutter);
            }
        }

        graph.prune_dangling_edges();
        assemble_pieces(graph.faces())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EdgeKind {
    Boundary,
    Cutter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Copy, Clone, Debug)]
struct GraphEdge {
    /// Boundary edges have the polygon interior on their left, cutter edges follow the cutter.
    nodes: [usize; 2],
    kind: EdgeKind,
    /// Set on boundary edges shared by two parts: both sides are inside the polygon.
    two_sided: bool,
    removed: bool,
}

#[derive(Default)]
struct PlanarGraph {
    positions: Vec<Point<Real>>,
    node_ids: HashMap<PointKey, usize>,
    edges: Vec<GraphEdge>,
    edge_ids: HashMap<[usize; 2], usize>,
}

struct Face {
    vertices: Vec<Point<Real>>,
    area: Real,
    outside: bool,
    side: Option<Side>,
}

impl PlanarGraph {
    fn node(&mut self, pt: &Point<Real>) -> usize {
        let positions = &mut self.positions;
        *self.node_ids.entry(utils::point_key(pt)).or_insert_with(|| {
            positions.push(*pt);
            positions.len() - 1
        })
    }

    fn add_edge(&mut self, segment: &Segment, kind: EdgeKind) {
        let a = self.node(&segment.a);
        let b = self.node(&segment.b);

        if a == b {
            return;
        }

        let key = if a < b { [a, b] } else { [b, a] };

        match self.edge_ids.entry(key) {
            Entry::Occupied(entry) => {
                let edge = &mut self.edges[*entry.get()];
                if edge.kind == EdgeKind::Boundary
                    && kind == EdgeKind::Boundary
                    && edge.nodes != [a, b]
                {
                    edge.two_sided = true;
                }
            }
            Entry::Vacant(entry) => {
                let _ = entry.insert(self.edges.len());
                self.edges.push(GraphEdge {
                    nodes: [a, b],
                    kind,
                    two_sided: false,
                    removed: false,
                });
            }
        }
    }

    /// Removes, until none is left, the edges with an endpoint no other edge is attached to.
    fn prune_dangling_edges(&mut self) {
        let mut incident = vec![Vec::new(); self.positions.len()];
        for (i, edge) in self.edges.iter().enumerate() {
            incident[edge.nodes[0]].push(i);
            incident[edge.nodes[1]].push(i);
        }

        let mut degree: Vec<usize> = incident.iter().map(|edges| edges.len()).collect();
        let mut to_visit: Vec<usize> = (0..degree.len()).filter(|i| degree[*i] == 1).collect();

        while let Some(node) = to_visit.pop() {
            if degree[node] != 1 {
                continue;
            }

            let Some(&edge_id) = incident[node].iter().find(|e| !self.edges[**e].removed) else {
                continue;
            };

            let edge = &mut self.edges[edge_id];
            edge.removed = true;

            if edge.kind == EdgeKind::Cutter {
                log::trace!("Pruned dangling cutter edge {:?}.", edge.nodes);
            }

            for end in edge.nodes {
                degree[end] -= 1;
                if degree[end] == 1 {
                    to_visit.push(end);
                }
            }
        }
    }

    /// Traces all the faces of the graph, each one with the face interior on its left.
    fn faces(&self) -> Vec<Face> {
        let edges: Vec<&GraphEdge> = self.edges.iter().filter(|e| !e.removed).collect();

        // Half-edge `2 * i` follows `edges[i]`, half-edge `2 * i + 1` is its twin.
        let num_half_edges = edges.len() * 2;
        let origin = |h: usize| edges[h / 2].nodes[h % 2];
        let target = |h: usize| edges[h / 2].nodes[1 - h % 2];

        let mut outgoing = vec![Vec::new(); self.positions.len()];
        for h in 0..num_half_edges {
            outgoing[origin(h)].push(h);
        }

        let mut slot = vec![0; num_half_edges];
        for (node, half_edges) in outgoing.iter_mut().enumerate() {
            let center = self.positions[node];
            half_edges.sort_by(|h1, h2| {
                angle_cmp(
                    &(self.positions[target(*h1)] - center),
                    &(self.positions[target(*h2)] - center),
                )
            });

            for (i, h) in half_edges.iter().enumerate() {
                slot[*h] = i;
            }
        }

        // The next half-edge around a face is the one preceding the twin in
        // counter-clockwise order around the target node.
        let next = |h: usize| {
            let twin = h ^ 1;
            let around = &outgoing[target(h)];
            around[(slot[twin] + around.len() - 1) % around.len()]
        };

        let mut visited = vec![false; num_half_edges];
        let mut faces = Vec::new();

        for start in 0..num_half_edges {
            if visited[start] {
                continue;
            }

            let mut face = Face {
                vertices: Vec::new(),
                area: 0.0,
                outside: false,
                side: None,
            };
            let mut h = start;

            loop {
                visited[h] = true;
                let edge = edges[h / 2];
                let forward = h % 2 == 0;

                face.vertices.push(self.positions[origin(h)]);

                match edge.kind {
                    EdgeKind::Boundary => face.outside |= !forward && !edge.two_sided,
                    EdgeKind::Cutter => {
                        if face.side.is_none() {
                            face.side = Some(if forward { Side::Left } else { Side::Right });
                        }
                    }
                }

                h = next(h);
                if h == start {
                    break;
                }
            }

            face.area = utils::ring_signed_area(&face.vertices);
            faces.push(face);
        }

        faces
    }
}

// Sorts directions counter-clockwise, starting from the positive x axis.
fn angle_cmp(a: &Vector<Real>, b: &Vector<Real>) -> Ordering {
    let half_plane = |v: &Vector<Real>| u8::from(!(v.y > 0.0 || (v.y == 0.0 && v.x > 0.0)));

    half_plane(a).cmp(&half_plane(b)).then_with(|| {
        let cross = a.perp(b);
        if cross > 0.0 {
            Ordering::Less
        } else if cross < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

fn ring_cmp(a: &Ring, b: &Ring) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

fn assemble_pieces(faces: Vec<Face>) -> SplitResult<Polygon> {
    let mut shells = Vec::new();
    let mut holes = Vec::new();

    for face in faces {
        if face.outside {
            continue;
        }

        if face.area > 0.0 {
            shells.push((face, Vec::new()));
        } else if face.area < 0.0 {
            holes.push(face);
        }
    }

    for hole in holes {
        let test_point = hole.vertices[0];
        let enclosing = shells
            .iter_mut()
            .filter(|(shell, _)| utils::point_in_poly2d(&test_point, &shell.vertices))
            .min_by(|(s1, _), (s2, _)| s1.area.total_cmp(&s2.area));

        match enclosing {
            Some((_, shell_holes)) => shell_holes.push(utils::canonical_ring(&hole.vertices, false)),
            None => log::debug!("Dropped a hole with no enclosing piece at {:?}.", test_point),
        }
    }

    let mut left = Vec::new();
    let mut right = Vec::new();

    for (shell, mut shell_holes) in shells {
        shell_holes.sort_by(ring_cmp);

        let mut rings = Vec::with_capacity(shell_holes.len() + 1);
        rings.push(utils::canonical_ring(&shell.vertices, true));
        rings.extend(shell_holes);

        match shell.side.unwrap_or(Side::Left) {
            Side::Left => left.push(rings),
            Side::Right => right.push(rings),
        }
    }

    left.sort_by(|a: &Vec<Ring>, b| ring_cmp(&a[0], &b[0]));
    right.sort_by(|a: &Vec<Ring>, b| ring_cmp(&a[0], &b[0]));

    match (left.is_empty(), right.is_empty()) {
        (false, false) => SplitResult::Pair(Polygon::from_parts(left), Polygon::from_parts(right)),
        (true, false) => SplitResult::Right,
        (_, true) => SplitResult::Left,
    }
}
