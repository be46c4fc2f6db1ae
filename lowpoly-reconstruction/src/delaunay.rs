//! Delaunay triangulation of normalized point sets
//!
//! This is the robust planar path: every point becomes a mesh vertex and the
//! triangles cover the convex hull without overlaps.

use lowpoly_core::{triangles_from_indices, Error, Point2f, Result, Triangle, Triangulate};
use rand::RngCore;
use spade::{DelaunayTriangulation, HasPosition, Point2, Triangulation};
use tracing::debug;

/// Vertex payload that remembers its position in the input sequence
#[derive(Debug, Clone, Copy)]
struct IndexedVertex {
    position: Point2<f64>,
    index: usize,
}

impl HasPosition for IndexedVertex {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// 2D Delaunay triangulation using spade crate
///
/// Returns index triples into `points`. Duplicate positions collapse onto a
/// single vertex, so some input indices may not appear in any face.
pub fn delaunay_triangulation_2d(points: &[Point2f]) -> Result<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(Error::Triangulation(
            "Need at least 3 points for triangulation".to_string(),
        ));
    }

    let mut triangulation: DelaunayTriangulation<IndexedVertex> = DelaunayTriangulation::new();

    for (index, point) in points.iter().enumerate() {
        let vertex = IndexedVertex {
            position: Point2::new(point.x as f64, point.y as f64),
            index,
        };
        triangulation.insert(vertex).map_err(|e| {
            Error::Triangulation(format!(
                "Failed to insert point {} ({}, {}): {:?}",
                index, point.x, point.y, e
            ))
        })?;
    }

    let faces: Vec<[usize; 3]> = triangulation
        .inner_faces()
        .map(|face| {
            let [a, b, c] = face.vertices();
            [a.data().index, b.data().index, c.data().index]
        })
        .collect();

    if faces.is_empty() {
        return Err(Error::Triangulation(
            "Point set is degenerate, no triangles generated".to_string(),
        ));
    }

    Ok(faces)
}

/// Robust planar triangulator backed by [`delaunay_triangulation_2d`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayTriangulator;

impl DelaunayTriangulator {
    pub fn new() -> Self {
        Self
    }
}

impl Triangulate for DelaunayTriangulator {
    fn name(&self) -> &'static str {
        "delaunay"
    }

    fn triangulate(&self, points: &[Point2f], _rng: &mut dyn RngCore) -> Result<Vec<Triangle>> {
        let faces = delaunay_triangulation_2d(points)?;
        let triangles = triangles_from_indices(points, &faces)?;
        debug!(points = points.len(), triangles = triangles.len(), "delaunay triangulation");
        Ok(triangles)
    }
}
