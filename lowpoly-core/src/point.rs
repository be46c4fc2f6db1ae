//! Point types and related functionality

use nalgebra::Point2;

/// A 2D point with floating point coordinates.
///
/// Pipeline points live in normalized unit space `[0,1] x [0,1]`, relative to
/// the dimensions of the source buffer they were sampled from.
pub type Point2f = Point2<f32>;

/// The four corners of the unit square, in the order the sampler emits them.
pub fn unit_square_corners() -> [Point2f; 4] {
    [
        Point2f::new(0.0, 0.0),
        Point2f::new(0.0, 1.0),
        Point2f::new(1.0, 0.0),
        Point2f::new(1.0, 1.0),
    ]
}

/// Convert a pixel coordinate into normalized unit space.
pub fn normalize_pixel(x: u32, y: u32, width: u32, height: u32) -> Point2f {
    Point2f::new(x as f32 / width as f32, y as f32 / height as f32)
}

/// Whether both coordinates lie in `[0,1]`
pub fn is_normalized(point: &Point2f) -> bool {
    (0.0..=1.0).contains(&point.x) && (0.0..=1.0).contains(&point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_corners_order() {
        let corners = unit_square_corners();
        assert_eq!(corners[0], Point2f::new(0.0, 0.0));
        assert_eq!(corners[1], Point2f::new(0.0, 1.0));
        assert_eq!(corners[2], Point2f::new(1.0, 0.0));
        assert_eq!(corners[3], Point2f::new(1.0, 1.0));
    }

    #[test]
    fn test_normalize_pixel() {
        let p = normalize_pixel(5, 2, 10, 8);
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, 0.25);
        assert!(is_normalized(&p));
    }

    #[test]
    fn test_is_normalized_rejects_outside() {
        assert!(!is_normalized(&Point2f::new(-0.01, 0.5)));
        assert!(!is_normalized(&Point2f::new(0.5, 1.01)));
        assert!(is_normalized(&Point2f::new(1.0, 0.0)));
    }
}
