//! Randomized fallback triangulation
//!
//! Enumerates index triples `i < j < k` and keeps each one with a small fixed
//! probability until a triangle cap is reached. The result is not a planar
//! triangulation: triangles may overlap, leave holes, or be degenerate. It is
//! visually inferior to [`crate::DelaunayTriangulator`] and exists so the
//! pipeline never depends on a triangulation library succeeding.

use lowpoly_core::{Point2f, Result, Triangle, Triangulate};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for randomized triangulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomTriangulationConfig {
    /// Probability of keeping each candidate triple
    pub acceptance_probability: f64,
    /// Triangle cap, as a multiple of the vertex budget
    pub triangles_per_vertex: usize,
}

impl Default for RandomTriangulationConfig {
    fn default() -> Self {
        Self {
            acceptance_probability: 0.01,
            triangles_per_vertex: 2,
        }
    }
}

impl RandomTriangulationConfig {
    /// Set the acceptance probability
    pub fn with_acceptance_probability(mut self, probability: f64) -> Self {
        self.acceptance_probability = probability;
        self
    }

    /// Set the triangle cap multiplier
    pub fn with_triangles_per_vertex(mut self, multiplier: usize) -> Self {
        self.triangles_per_vertex = multiplier;
        self
    }
}

/// Randomized, non-planar triangulator
#[derive(Debug, Clone, Copy)]
pub struct RandomTriangulator {
    max_triangles: usize,
    acceptance_probability: f64,
}

impl RandomTriangulator {
    /// Create a triangulator capped at `triangles_per_vertex * vertex_budget` triangles
    pub fn new(vertex_budget: usize, config: &RandomTriangulationConfig) -> Self {
        let acceptance_probability = if config.acceptance_probability.is_nan() {
            0.0
        } else {
            config.acceptance_probability.clamp(0.0, 1.0)
        };
        Self {
            max_triangles: vertex_budget.saturating_mul(config.triangles_per_vertex),
            acceptance_probability,
        }
    }

    /// Maximum number of triangles a single call can return
    pub fn max_triangles(&self) -> usize {
        self.max_triangles
    }
}

impl Triangulate for RandomTriangulator {
    fn name(&self) -> &'static str {
        "random"
    }

    fn triangulate(&self, points: &[Point2f], rng: &mut dyn RngCore) -> Result<Vec<Triangle>> {
        let n = points.len();
        let mut triangles = Vec::new();

        'outer: for i in 0..n.saturating_sub(2) {
            for j in i + 1..n - 1 {
                for k in j + 1..n {
                    if triangles.len() >= self.max_triangles {
                        break 'outer;
                    }
                    if rng.gen_bool(self.acceptance_probability) {
                        triangles.push(Triangle::new(points[i], points[j], points[k]));
                    }
                }
            }
        }

        debug!(points = n, triangles = triangles.len(), "random triangulation");
        Ok(triangles)
    }
}
