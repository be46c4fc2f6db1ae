//! Integration tests for lowpoly-render
//!
//! These tests drive the rasterizer through a mocked render target, a
//! recording target and the tiny-skia canvas.

use lowpoly_core::{Frame, PixelBuffer, Point2f, RenderTarget, Rgb, Triangle};
use lowpoly_render::*;
use mockall::{mock, Sequence};
use proptest::prelude::*;

mock! {
    pub Target {}

    impl RenderTarget for Target {
        fn width(&self) -> u32;
        fn height(&self) -> u32;
        fn clear(&mut self);
        fn fill_triangle(&mut self, vertices: [Point2f; 3], color: Rgb);
        fn stroke_triangle(&mut self, vertices: [Point2f; 3], color: Rgb, line_width: f32);
    }
}

/// Render target that records every fill call
#[derive(Default)]
struct RecordingTarget {
    fills: Vec<([Point2f; 3], Rgb)>,
    strokes: usize,
    clears: usize,
}

impl RenderTarget for RecordingTarget {
    fn width(&self) -> u32 {
        100
    }

    fn height(&self) -> u32 {
        100
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_triangle(&mut self, vertices: [Point2f; 3], color: Rgb) {
        self.fills.push((vertices, color));
    }

    fn stroke_triangle(&mut self, _vertices: [Point2f; 3], _color: Rgb, _line_width: f32) {
        self.strokes += 1;
    }
}

fn unit_triangles() -> Vec<Triangle> {
    vec![
        Triangle::new(Point2f::new(0.0, 0.0), Point2f::new(0.0, 1.0), Point2f::new(1.0, 0.0)),
        Triangle::new(Point2f::new(0.0, 1.0), Point2f::new(1.0, 0.0), Point2f::new(1.0, 1.0)),
    ]
}

/// Frame whose pixel at (x, y) encodes its own coordinates
fn coordinate_frame(width: u32, height: u32) -> Frame {
    let mut frame = Frame::solid(width, height, [0, 0, 0]);
    for y in 0..height {
        for x in 0..width {
            frame.set_rgb(x, y, [x as u8, y as u8, (x ^ y) as u8]);
        }
    }
    frame
}

#[test]
fn test_clear_happens_before_fills() {
    let frame = Frame::solid(4, 4, [0, 0, 0]);
    let mut target = MockTarget::new();
    let mut seq = Sequence::new();

    target.expect_clear().times(1).in_sequence(&mut seq).return_const(());
    target
        .expect_fill_triangle()
        .withf(|_, color| *color == [0, 0, 0])
        .times(2)
        .in_sequence(&mut seq)
        .return_const(());
    target.expect_stroke_triangle().never();

    rasterize(&unit_triangles(), &frame.view(), &mut target, &Viewport::fill(4, 4), None);
}

#[test]
fn test_wireframe_strokes_each_triangle_after_fill() {
    let frame = Frame::solid(4, 4, [10, 20, 30]);
    let style = WireframeStyle::default();
    let mut target = MockTarget::new();
    let mut seq = Sequence::new();

    target.expect_clear().times(1).in_sequence(&mut seq).return_const(());
    for _ in 0..2 {
        target
            .expect_fill_triangle()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        target
            .expect_stroke_triangle()
            .withf(|_, color, width| *color == [255, 255, 0] && *width == 0.5)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }

    rasterize(&unit_triangles(), &frame.view(), &mut target, &Viewport::fill(4, 4), Some(&style));
}

#[test]
fn test_vertices_are_mapped_through_viewport() {
    let frame = Frame::solid(2, 2, [1, 1, 1]);
    let mut target = RecordingTarget::default();
    let viewport = Viewport::letterbox(2, 2, 200, 100);

    rasterize(&unit_triangles()[..1], &frame.view(), &mut target, &viewport, None);

    let (vertices, _) = target.fills[0];
    assert_eq!(vertices[0], Point2f::new(50.0, 0.0));
    assert_eq!(vertices[1], Point2f::new(50.0, 100.0));
    assert_eq!(vertices[2], Point2f::new(150.0, 0.0));
    assert_eq!(target.clears, 1);
    assert_eq!(target.strokes, 0);
}

#[test]
fn test_draw_order_follows_sequence() {
    let frame = Frame::solid(8, 8, [0, 0, 0]);
    let mut frame_with_marks = frame.clone();
    frame_with_marks.set_rgb(2, 2, [255, 0, 0]);

    // Both triangles cover target pixel (4, 1); the later fill must win
    let first = Triangle::new(Point2f::new(0.0, 0.0), Point2f::new(0.9, 0.0), Point2f::new(0.0, 0.1));
    let second = Triangle::new(Point2f::new(0.0, 0.0), Point2f::new(1.0, 0.0), Point2f::new(0.0, 1.0));
    let mut canvas = Canvas::new(80, 80).unwrap();

    rasterize(&[first, second], &frame_with_marks.view(), &mut canvas, &Viewport::fill(80, 80), None);

    // `first` centroid is (0.3, 0.033) -> source pixel (2, 0), black
    // `second` centroid is (1/3, 1/3) -> source pixel (2, 2), red
    assert_eq!(canvas.pixel(4, 1), Some([255, 0, 0, 255]));
}

#[test]
fn test_all_black_source_fills_black() {
    let frame = Frame::solid(4, 4, [0, 0, 0]);
    let mut canvas = Canvas::new(16, 16).unwrap();

    rasterize(&unit_triangles(), &frame.view(), &mut canvas, &Viewport::fill(16, 16), None);

    for (x, y) in [(1, 1), (8, 8), (14, 14), (2, 13)] {
        assert_eq!(canvas.pixel(x, y), Some([0, 0, 0, 255]));
    }
}

#[test]
fn test_wireframe_outline_is_visible_on_canvas() {
    let frame = Frame::solid(4, 4, [0, 0, 0]);
    let triangles = vec![Triangle::new(
        Point2f::new(0.1, 0.1),
        Point2f::new(0.9, 0.1),
        Point2f::new(0.5, 0.9),
    )];
    let mut canvas = Canvas::new(100, 100).unwrap();

    rasterize(&triangles, &frame.view(), &mut canvas, &Viewport::fill(100, 100), Some(&WireframeStyle::default()));

    // Any stroked pixel shows up as a non-black color over the black fill
    let stroked_near = |cx: i32, cy: i32| {
        (-1..=1).any(|dy| {
            (-1..=1).any(|dx| {
                canvas
                    .pixel((cx + dx) as u32, (cy + dy) as u32)
                    .map_or(false, |p| p[0] > 0 || p[1] > 0)
            })
        })
    };

    // Midpoints of the three edges in target coordinates
    assert!(stroked_near(50, 10));
    assert!(stroked_near(70, 50));
    assert!(stroked_near(30, 50));

    // Interior keeps the flat fill
    assert_eq!(canvas.pixel(50, 40), Some([0, 0, 0, 255]));
}

#[test]
fn test_empty_source_only_clears() {
    let empty = PixelBuffer::new(0, 0, &[]).unwrap();
    let mut target = RecordingTarget::default();

    rasterize(&unit_triangles(), &empty, &mut target, &Viewport::fill(10, 10), None);

    assert_eq!(target.clears, 1);
    assert!(target.fills.is_empty());
}

proptest! {
    #[test]
    fn prop_fill_color_is_pixel_at_floored_centroid(
        width in 1u32..32,
        height in 1u32..32,
        coords in prop::collection::vec(0.0f32..1.0, 6),
    ) {
        let frame = coordinate_frame(width, height);
        let triangle = Triangle::new(
            Point2f::new(coords[0], coords[1]),
            Point2f::new(coords[2], coords[3]),
            Point2f::new(coords[4], coords[5]),
        );
        let mut target = RecordingTarget::default();

        rasterize(&[triangle], &frame.view(), &mut target, &Viewport::fill(100, 100), None);

        let centroid = triangle.centroid();
        let x = ((centroid.x * width as f32).floor() as u32).min(width - 1);
        let y = ((centroid.y * height as f32).floor() as u32).min(height - 1);
        prop_assert_eq!(target.fills.len(), 1);
        prop_assert_eq!(target.fills[0].1, frame.view().rgb(x, y));
    }
}
