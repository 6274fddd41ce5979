//! Basic planar types: `Point` and `Segment`.

use nalgebra::Vector2;

/// A vertex on the plane.
///
/// Immutable value type; two points with equal coordinates are
/// interchangeable everywhere in this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Construct from components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct from an `[x, y]` pair, e.g. a row of deserialized input.
    #[inline]
    pub fn from_pair(xy: [f64; 2]) -> Self {
        Self { x: xy[0], y: xy[1] }
    }

    /// Coordinates as a nalgebra vector for vector arithmetic.
    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from(xy: [f64; 2]) -> Self {
        Self::from_pair(xy)
    }
}

/// A directed line segment between two points.
pub type Segment = (Point, Point);
