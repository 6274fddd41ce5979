//! Planar polygon geometry.
//!
//! Purpose
//! - Provide the orientation (`ccw`) and proper-crossing (`intersect`)
//!   predicates plus a vertex-list `Polygon` with convexity, point
//!   containment, polygon containment, and edge-intersection queries.
//! - Keep everything a pure function of its inputs: polygons are
//!   immutable after construction and every query is deterministic.
//!
//! Conventions
//! - Coordinates are `f64`; predicates compare exactly (strict `> 0`
//!   on the cross product, no epsilon). Collinear triples are therefore
//!   not counter-clockwise, and touching or collinear segments are not
//!   guaranteed to be classified as crossing.
//! - Degenerate input never panics: polygons with fewer than three
//!   vertices are not convex, and containment queries on empty polygons
//!   answer `false`.

pub mod polygon;
pub mod predicates;
pub mod rand;
pub mod types;

pub use polygon::{sort_ccw, Polygon};
pub use predicates::{ccw, cross, intersect};
pub use types::{Point, Segment};
