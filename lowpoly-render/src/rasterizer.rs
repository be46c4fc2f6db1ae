//! Flat-shaded triangle rasterization with centroid color sampling

use crate::viewport::Viewport;
use lowpoly_core::{PixelBuffer, RenderTarget, Rgb, Triangle};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Color and width of the wireframe overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeStyle {
    pub color: Rgb,
    pub line_width: f32,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            color: [255, 255, 0],
            line_width: 0.5,
        }
    }
}

/// Source pixel under a triangle's centroid, in buffer coordinates.
///
/// The scaled centroid is floored and clamped into the buffer, so a centroid
/// lying exactly on the far edge samples the last row or column.
pub fn centroid_pixel(triangle: &Triangle, source: &PixelBuffer<'_>) -> (u32, u32) {
    let centroid = triangle.centroid();
    let max_x = source.width().saturating_sub(1);
    let max_y = source.height().saturating_sub(1);

    let x = (centroid.x * source.width() as f32).floor().max(0.0) as u32;
    let y = (centroid.y * source.height() as f32).floor().max(0.0) as u32;
    (x.min(max_x), y.min(max_y))
}

/// Fill color of a triangle: the source RGB at its centroid, alpha ignored
pub fn centroid_color(triangle: &Triangle, source: &PixelBuffer<'_>) -> Rgb {
    let (x, y) = centroid_pixel(triangle, source);
    source.rgb(x, y)
}

/// Draw a low-poly mesh onto a render target
///
/// The target is cleared first. Triangles are drawn in sequence order, so
/// later triangles paint over earlier ones where they overlap. With a
/// wireframe style each triangle is stroked right after it is filled.
///
/// # Arguments
/// * `triangles` - Mesh in normalized coordinates
/// * `source` - Buffer the mesh was sampled from, used for fill colors
/// * `target` - Surface to draw on
/// * `viewport` - Mapping from normalized to target coordinates
/// * `wireframe` - Optional edge overlay
pub fn rasterize<T: RenderTarget + ?Sized>(
    triangles: &[Triangle],
    source: &PixelBuffer<'_>,
    target: &mut T,
    viewport: &Viewport,
    wireframe: Option<&WireframeStyle>,
) {
    target.clear();

    if source.is_empty() {
        return;
    }

    for triangle in triangles {
        let color = centroid_color(triangle, source);
        let mapped = triangle.vertices.map(|v| viewport.map(v));

        target.fill_triangle(mapped, color);
        if let Some(style) = wireframe {
            target.stroke_triangle(mapped, style.color, style.line_width);
        }
    }

    debug!(
        triangles = triangles.len(),
        wireframe = wireframe.is_some(),
        "mesh rasterized"
    );
}
