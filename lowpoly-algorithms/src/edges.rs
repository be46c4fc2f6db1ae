//! Gradient based edge detection

use lowpoly_core::{EdgeMask, PixelBuffer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for edge detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Minimum brightness difference (0-255 scale) between opposite
    /// neighbors for a pixel to count as an edge
    pub threshold: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self { threshold: 30.0 }
    }
}

impl EdgeConfig {
    /// Set the brightness difference threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Build a binary edge mask from local brightness gradients
///
/// For every interior pixel the brightness of the left/right and up/down
/// neighbors is compared. The pixel is an edge when either difference exceeds
/// the threshold. The one pixel wide border is never marked.
///
/// # Arguments
/// * `buffer` - Source pixels
/// * `config` - Edge detection parameters
///
/// # Returns
/// * `EdgeMask` - Mask with the same dimensions as `buffer`
///
/// # Example
/// ```rust
/// use lowpoly_core::Frame;
/// use lowpoly_algorithms::{detect_edges, EdgeConfig};
///
/// let frame = Frame::solid(8, 8, [0, 0, 0]);
/// let mask = detect_edges(&frame.view(), &EdgeConfig::default());
/// assert_eq!(mask.edge_count(), 0);
/// ```
pub fn detect_edges(buffer: &PixelBuffer<'_>, config: &EdgeConfig) -> EdgeMask {
    let (width, height) = (buffer.width(), buffer.height());
    let mut mask = EdgeMask::new(width, height);

    if width < 3 || height < 3 {
        return mask;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let horizontal = (buffer.brightness(x - 1, y) - buffer.brightness(x + 1, y)).abs();
            let vertical = (buffer.brightness(x, y - 1) - buffer.brightness(x, y + 1)).abs();

            if horizontal > config.threshold || vertical > config.threshold {
                mask.mark(x, y);
            }
        }
    }

    debug!(width, height, edges = mask.edge_count(), "edge mask built");
    mask
}
