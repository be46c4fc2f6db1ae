//! Triangle data structures and functionality

use crate::error::{Error, Result};
use crate::point::Point2f;
use serde::{Deserialize, Serialize};

/// An ordered triple of points. No winding order is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point2f; 3],
}

impl Triangle {
    /// Create a triangle from three points
    pub fn new(a: Point2f, b: Point2f, c: Point2f) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Unweighted average of the three vertices
    pub fn centroid(&self) -> Point2f {
        let [a, b, c] = self.vertices;
        Point2f::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }
}

/// Build triangles by dereferencing index triples into a point sequence
pub fn triangles_from_indices(points: &[Point2f], faces: &[[usize; 3]]) -> Result<Vec<Triangle>> {
    faces
        .iter()
        .map(|&[i, j, k]| {
            match (points.get(i), points.get(j), points.get(k)) {
                (Some(&a), Some(&b), Some(&c)) => Ok(Triangle::new(a, b, c)),
                _ => Err(Error::InvalidData(format!(
                    "face [{}, {}, {}] references a point outside 0..{}",
                    i,
                    j,
                    k,
                    points.len()
                ))),
            }
        })
        .collect()
}
