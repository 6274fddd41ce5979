//! Pairwise relationships between simple polygons in the plane.
//!
//! The crate is a small geometric predicate library: orientation and
//! segment-crossing tests, point-in-polygon, polygon convexity, and the
//! containment / intersection / separateness queries built from them.
//! Loading shape data and reporting results is the caller's job (see the
//! `cli` crate); nothing in here performs I/O.

pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom::{ccw, cross, intersect, sort_ccw, Point, Polygon, Segment};
}
