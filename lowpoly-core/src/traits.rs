//! Core traits for lowpoly

use crate::{error::Result, mesh::Triangle, pixel::Rgb, point::Point2f};
use rand::RngCore;

/// A mutable 2D drawable surface.
///
/// Vertex coordinates passed to the drawing methods are in target-surface
/// pixel space, already scaled and offset by the caller.
pub trait RenderTarget {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Reset every pixel to transparent
    fn clear(&mut self);

    /// Fill a triangle with a flat opaque color
    fn fill_triangle(&mut self, vertices: [Point2f; 3], color: Rgb);

    /// Stroke the three edges of a triangle
    fn stroke_triangle(&mut self, vertices: [Point2f; 3], color: Rgb, line_width: f32);
}

/// Trait for turning a point set into triangles
pub trait Triangulate {
    /// Short name used in logs and pass reports
    fn name(&self) -> &'static str;

    /// Triangulate `points`, drawing any randomness from `rng`.
    ///
    /// Every returned vertex must be taken from `points`.
    fn triangulate(&self, points: &[Point2f], rng: &mut dyn RngCore) -> Result<Vec<Triangle>>;
}
