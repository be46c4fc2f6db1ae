//! Triangulator selection with automatic fallback
//!
//! The triangulator is chosen at configuration time. A primary triangulator
//! that fails is logged and superseded by the randomized fallback within the
//! same call; the error never reaches the caller.

use crate::{DelaunayTriangulator, RandomTriangulationConfig, RandomTriangulator};
use lowpoly_core::{Point2f, Triangle, Triangulate};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Triangulation algorithms available to the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangulatorKind {
    /// Delaunay triangulation, with the randomized fallback on error
    #[default]
    Delaunay,
    /// Randomized triples only
    Random,
}

impl std::str::FromStr for TriangulatorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "delaunay" => Ok(Self::Delaunay),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown triangulator '{}'", other)),
        }
    }
}

/// Result of a triangulation with metadata
#[derive(Debug, Clone)]
pub struct TriangulationOutcome {
    /// The generated triangles
    pub triangles: Vec<Triangle>,
    /// Name of the triangulator that produced `triangles`
    pub algorithm_used: &'static str,
    /// Whether the primary triangulator failed and the fallback ran instead
    pub used_fallback: bool,
}

/// A primary triangulator plus the randomized fallback
pub struct TriangulationStrategy {
    primary: Box<dyn Triangulate + Send + Sync>,
    fallback: RandomTriangulator,
}

impl TriangulationStrategy {
    /// Build the strategy for a triangulator kind and vertex budget
    pub fn new(kind: TriangulatorKind, vertex_budget: usize, config: &RandomTriangulationConfig) -> Self {
        let fallback = RandomTriangulator::new(vertex_budget, config);
        let primary: Box<dyn Triangulate + Send + Sync> = match kind {
            TriangulatorKind::Delaunay => Box::new(DelaunayTriangulator::new()),
            TriangulatorKind::Random => Box::new(fallback),
        };
        Self { primary, fallback }
    }

    /// Use a custom primary triangulator
    pub fn with_primary(primary: Box<dyn Triangulate + Send + Sync>, fallback: RandomTriangulator) -> Self {
        Self { primary, fallback }
    }

    /// Name of the primary triangulator
    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Triangulate, falling back to randomized triples if the primary path errors
    pub fn triangulate(&self, points: &[Point2f], rng: &mut dyn RngCore) -> TriangulationOutcome {
        match self.primary.triangulate(points, rng) {
            Ok(triangles) => TriangulationOutcome {
                triangles,
                algorithm_used: self.primary.name(),
                used_fallback: false,
            },
            Err(e) => {
                warn!(
                    primary = self.primary.name(),
                    points = points.len(),
                    "triangulation failed, using randomized fallback: {}",
                    e
                );
                // The randomized triangulator never errors; an empty mesh is the worst case
                let triangles = self.fallback.triangulate(points, rng).unwrap_or_default();
                TriangulationOutcome {
                    triangles,
                    algorithm_used: self.fallback.name(),
                    used_fallback: true,
                }
            }
        }
    }
}

impl std::fmt::Debug for TriangulationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangulationStrategy")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback)
            .finish()
    }
}
