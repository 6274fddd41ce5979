//! Shapes-file loading.
//!
//! Expected document shape:
//! `{"geometry": {"shape": [{"id": "...", "point": [{"x": .., "y": ..}]}]}}`

use anyhow::{Context, Result};
use polyrel::prelude::{Point, Polygon};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct ShapesFile {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    shape: Vec<Shape>,
}

#[derive(Deserialize)]
struct Shape {
    id: String,
    point: Vec<Coord>,
}

#[derive(Deserialize)]
struct Coord {
    x: f64,
    y: f64,
}

/// Load polygons from a JSON shapes file, in file order.
pub fn load_shapes<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let doc: ShapesFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let polygons = doc
        .geometry
        .shape
        .into_iter()
        .map(|s| {
            let vertices = s.point.iter().map(|c| Point::new(c.x, c.y)).collect();
            Polygon::new(vertices, s.id)
        })
        .collect();
    Ok(polygons)
}
