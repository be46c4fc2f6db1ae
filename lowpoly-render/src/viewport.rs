//! Mapping from normalized mesh space to target pixels

use lowpoly_core::Point2f;

/// Scale and offset applied to normalized coordinates when drawing.
///
/// `target = point * (width, height) + (offset_x, offset_y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    /// Stretch the mesh over the whole target
    pub fn fill(target_width: u32, target_height: u32) -> Self {
        Self {
            width: target_width as f32,
            height: target_height as f32,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Fit the source inside the target preserving its aspect ratio.
    ///
    /// A target that is relatively wider than the source gets bars left and
    /// right; otherwise the bars go above and below.
    pub fn letterbox(source_width: u32, source_height: u32, target_width: u32, target_height: u32) -> Self {
        if source_width == 0 || source_height == 0 || target_width == 0 || target_height == 0 {
            return Self::fill(target_width, target_height);
        }

        let source_ratio = source_width as f32 / source_height as f32;
        let target_ratio = target_width as f32 / target_height as f32;
        let (target_width, target_height) = (target_width as f32, target_height as f32);

        if target_ratio > source_ratio {
            let height = target_height;
            let width = height * source_ratio;
            Self {
                width,
                height,
                offset_x: (target_width - width) / 2.0,
                offset_y: 0.0,
            }
        } else {
            let width = target_width;
            let height = width / source_ratio;
            Self {
                width,
                height,
                offset_x: 0.0,
                offset_y: (target_height - height) / 2.0,
            }
        }
    }

    /// Map a normalized point into target coordinates
    #[inline]
    pub fn map(&self, point: Point2f) -> Point2f {
        Point2f::new(
            point.x * self.width + self.offset_x,
            point.y * self.height + self.offset_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fill_maps_corners() {
        let viewport = Viewport::fill(200, 100);
        assert_eq!(viewport.map(Point2f::new(1.0, 1.0)), Point2f::new(200.0, 100.0));
        assert_eq!(viewport.map(Point2f::new(0.0, 0.0)), Point2f::new(0.0, 0.0));
    }

    #[test]
    fn test_letterbox_wide_target() {
        // 1:1 source into a 2:1 target leaves bars left and right
        let viewport = Viewport::letterbox(50, 50, 200, 100);
        assert_relative_eq!(viewport.width, 100.0);
        assert_relative_eq!(viewport.height, 100.0);
        assert_relative_eq!(viewport.offset_x, 50.0);
        assert_relative_eq!(viewport.offset_y, 0.0);
    }

    #[test]
    fn test_letterbox_tall_target() {
        // 2:1 source into a 1:1 target leaves bars above and below
        let viewport = Viewport::letterbox(400, 200, 100, 100);
        assert_relative_eq!(viewport.width, 100.0);
        assert_relative_eq!(viewport.height, 50.0);
        assert_relative_eq!(viewport.offset_x, 0.0);
        assert_relative_eq!(viewport.offset_y, 25.0);

        let mapped = viewport.map(Point2f::new(0.5, 1.0));
        assert_relative_eq!(mapped.x, 50.0);
        assert_relative_eq!(mapped.y, 75.0);
    }

    #[test]
    fn test_letterbox_same_aspect() {
        let viewport = Viewport::letterbox(64, 48, 640, 480);
        assert_relative_eq!(viewport.width, 640.0, epsilon = 1e-3);
        assert_relative_eq!(viewport.height, 480.0, epsilon = 1e-3);
        assert_relative_eq!(viewport.offset_x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(viewport.offset_y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_letterbox_degenerate_source() {
        assert_eq!(Viewport::letterbox(0, 10, 30, 20), Viewport::fill(30, 20));
    }
}
