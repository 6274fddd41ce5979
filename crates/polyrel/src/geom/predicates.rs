//! Free-standing orientation and segment-crossing predicates.
//!
//! These stay standalone functions (not methods) so they can be tested
//! and reused in isolation; the `Polygon` queries are built on top.

use super::types::{Point, Segment};

/// Signed cross product of `(b - a) × (c - a)`.
///
/// Twice the signed area of triangle `abc`: positive when the turn
/// a→b→c is counter-clockwise, negative when clockwise, zero when the
/// points are collinear.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.coords() - a.coords();
    let ac = c.coords() - a.coords();
    ab.x * ac.y - ab.y * ac.x
}

/// True iff the turn a→b→c is strictly counter-clockwise.
///
/// Collinear triples yield exactly zero and return `false` under the
/// strict comparison.
#[inline]
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) > 0.0
}

/// True iff segments `a` and `b` properly cross.
///
/// The endpoints of `a` must straddle the line through `b` and vice
/// versa, tested by comparing orientations. Touching, collinear, or
/// overlapping segments are not guaranteed to be classified as crossing.
#[inline]
pub fn intersect(a: Segment, b: Segment) -> bool {
    ccw(a.0, b.0, b.1) != ccw(a.1, b.0, b.1) && ccw(a.0, a.1, b.0) != ccw(a.0, a.1, b.1)
}
