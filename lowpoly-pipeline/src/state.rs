//! Pass-scoped pipeline state

use lowpoly_core::{Point2f, Triangle};
use lowpoly_render::Viewport;

/// Everything one pass produces, threaded through the stages by value.
///
/// A fresh state is created for every pass; nothing from an earlier pass is
/// merged into it.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    /// Source buffer dimensions the points were sampled from
    pub source_width: u32,
    pub source_height: u32,
    /// Sampled vertex set, corners first
    pub points: Vec<Point2f>,
    /// Triangles built from `points`
    pub triangles: Vec<Triangle>,
    /// Mapping used to draw the triangles
    pub viewport: Viewport,
}

impl PipelineState {
    /// Empty state for a pass over a `source_width x source_height` buffer
    pub fn new(source_width: u32, source_height: u32, viewport: Viewport) -> Self {
        Self {
            source_width,
            source_height,
            points: Vec::new(),
            triangles: Vec::new(),
            viewport,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
