//! Software render target backed by a tiny-skia pixmap

use image::RgbaImage;
use lowpoly_core::{Error, Point2f, RenderTarget, Result, Rgb};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// An RGBA canvas implementing [`RenderTarget`].
///
/// Fills are drawn without anti-aliasing so every covered pixel carries the
/// exact fill color. Strokes are anti-aliased, which keeps sub-pixel line
/// widths visible.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("cannot allocate a {}x{} canvas", width, height))
        })?;
        Ok(Self { pixmap })
    }

    /// Borrow the underlying pixmap
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA value of a pixel, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Copy the canvas into a straight-alpha RGBA image
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        RgbaImage::from_raw(self.pixmap.width(), self.pixmap.height(), data)
            .ok_or_else(|| Error::Render("canvas data does not match its dimensions".to_string()))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

/// Closed triangle path; `None` for non-finite coordinates
fn triangle_path(vertices: &[Point2f; 3]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(vertices[0].x, vertices[0].y);
    pb.line_to(vertices[1].x, vertices[1].y);
    pb.line_to(vertices[2].x, vertices[2].y);
    pb.close();
    pb.finish()
}

fn solid_paint(color: Rgb, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], 255);
    paint.anti_alias = anti_alias;
    paint
}

impl RenderTarget for Canvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn fill_triangle(&mut self, vertices: [Point2f; 3], color: Rgb) {
        if let Some(path) = triangle_path(&vertices) {
            let paint = solid_paint(color, false);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke_triangle(&mut self, vertices: [Point2f; 3], color: Rgb, line_width: f32) {
        if let Some(path) = triangle_path(&vertices) {
            let paint = solid_paint(color, true);
            let stroke = Stroke {
                width: line_width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}
