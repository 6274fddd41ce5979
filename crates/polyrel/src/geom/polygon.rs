//! Vertex-list polygons and the queries over them.
//!
//! Invariants
//! - `edges` is derived once at construction: edge i connects vertex i
//!   to vertex (i+1) mod n, so the closing segment back to the first
//!   vertex is always present. `edges.len() == vertices.len()` for a
//!   non-empty polygon, zero otherwise.
//! - The vertex order is caller-supplied and not validated to be simple
//!   or consistently wound; query results on self-intersecting input are
//!   undefined.

use std::cmp::Ordering;

use super::predicates::{cross, intersect};
use super::types::{Point, Segment};

/// An immutable polygon: named, ordered vertex sequence plus derived edges.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    name: String,
    vertices: Vec<Point>,
    edges: Vec<Segment>,
}

impl Polygon {
    /// Construct from a finished vertex sequence and a name.
    pub fn new(vertices: Vec<Point>, name: impl Into<String>) -> Self {
        let n = vertices.len();
        let edges = (0..n).map(|i| (vertices[i], vertices[(i + 1) % n])).collect();
        Self {
            name: name.into(),
            vertices,
            edges,
        }
    }

    /// Construct without a name.
    pub fn unnamed(vertices: Vec<Point>) -> Self {
        Self::new(vertices, "")
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edge cycle, including the closing last-to-first segment.
    #[inline]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Convexity of the vertex *set*, independent of the supplied order.
    ///
    /// Re-derives a canonical counter-clockwise order via [`sort_ccw`]
    /// and scans every consecutive triple for a strictly clockwise turn.
    /// Collinear triples pass. Fewer than three vertices is not a
    /// polygon and answers `false`.
    pub fn is_convex(&self) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let verts = sort_ccw(&self.vertices);
        let n = verts.len();
        (0..n).all(|i| cross(verts[i], verts[(i + 1) % n], verts[(i + 2) % n]) >= 0.0)
    }

    /// Even-odd ray-cast containment test.
    ///
    /// Casts a ray in +x from `p` and toggles on each edge whose y-span
    /// covers `p.y` (lower end exclusive, upper inclusive) and whose
    /// crossing lies at or right of `p.x`. Vertical edges toggle without
    /// computing the crossing; the division is reachable only for edges
    /// with distinct y coordinates, so degenerate and horizontal edges
    /// are skipped by the span test rather than dividing by zero.
    ///
    /// Points exactly on the boundary may classify either way. An empty
    /// polygon contains nothing.
    pub fn contains_point(&self, p: Point) -> bool {
        let mut inside = false;
        for &(p1, p2) in &self.edges {
            if p.y > p1.y.min(p2.y) && p.y <= p1.y.max(p2.y) && p.x <= p1.x.max(p2.x) {
                if p1.x == p2.x {
                    inside = !inside;
                } else {
                    let x_int = (p.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                    if p.x <= x_int {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }

    /// True iff every vertex of `other` lies inside `self`.
    ///
    /// Vertex-only test: edges of `other` are not checked, so a
    /// non-convex `self` can report containment even when an edge of
    /// `other` leaves it. Either polygon being empty answers `false`.
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        if self.vertices.is_empty() || other.vertices.is_empty() {
            return false;
        }
        other.vertices.iter().all(|&p| self.contains_point(p))
    }

    /// True iff `self` lies inside `other`; delegates to
    /// [`Polygon::contains_polygon`].
    #[inline]
    pub fn is_inside(&self, other: &Polygon) -> bool {
        other.contains_polygon(self)
    }

    /// True iff any edge of `self` properly crosses any edge of `other`.
    ///
    /// Quadratic in the edge counts; no spatial indexing.
    pub fn intersects(&self, other: &Polygon) -> bool {
        self.edges
            .iter()
            .any(|&a| other.edges.iter().any(|&b| intersect(a, b)))
    }
}

/// Canonical counter-clockwise ordering of a vertex set.
///
/// Anchor = minimum-y vertex, ties broken by minimum x. Vertices are
/// sorted by `atan2` angle around the anchor, ascending; angle ties are
/// broken by squared distance from the anchor (nearest first), which
/// puts the anchor itself first and keeps vertices collinear with it on
/// a ray in a usable order. A plain angular sort misorders exactly those
/// ties. Returns a new sequence; the input is not mutated.
pub fn sort_ccw(points: &[Point]) -> Vec<Point> {
    let Some(&anchor) = points.iter().min_by(|a, b| {
        (a.y, a.x)
            .partial_cmp(&(b.y, b.x))
            .unwrap_or(Ordering::Equal)
    }) else {
        return Vec::new();
    };
    let mut sorted = points.to_vec();
    sorted.sort_by(|p, q| {
        let ap = (p.y - anchor.y).atan2(p.x - anchor.x);
        let aq = (q.y - anchor.y).atan2(q.x - anchor.x);
        ap.partial_cmp(&aq)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                let dp = (p.coords() - anchor.coords()).norm_squared();
                let dq = (q.coords() - anchor.coords()).norm_squared();
                dp.partial_cmp(&dq).unwrap_or(Ordering::Equal)
            })
    });
    sorted
}
