//! Basic usage example for lowpoly
//!
//! Renders a synthetic gradient twice, once plain and once with the
//! wireframe overlay, and writes both as PNG files to the temp directory.

use lowpoly_core::Frame;
use lowpoly_pipeline::{LowPolyPipeline, PipelineConfig};
use lowpoly_render::Canvas;

fn gradient(width: u32, height: u32) -> Frame {
    let mut frame = Frame::solid(width, height, [0, 0, 0]);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = if (x / 40 + y / 40) % 2 == 0 { 200 } else { 60 };
            frame.set_rgb(x, y, [r, g, b]);
        }
    }
    frame
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("lowpoly basic usage");
    println!("===================");

    let frame = gradient(320, 240);
    let config = PipelineConfig::default().with_vertex_budget(400).with_seed(7);
    let mut pipeline = LowPolyPipeline::new(config);
    let mut canvas = Canvas::new(640, 480)?;

    let report = pipeline.render_still(Some(&frame.view()), &mut canvas, |report| {
        println!(
            "Rendered {} triangles from {} points with {:?}",
            report.triangle_count(),
            report.point_count(),
            report.triangulator
        );
    });

    let out_dir = std::env::temp_dir();
    let plain = out_dir.join("lowpoly_plain.png");
    canvas.to_rgba_image()?.save(&plain)?;
    println!("Wrote {}", plain.display());

    // same mesh, redrawn with edges
    if let Some(state) = &report.state {
        pipeline.set_wireframe(true);
        pipeline.redraw(state, &frame.view(), &mut canvas);

        let wired = out_dir.join("lowpoly_wireframe.png");
        canvas.to_rgba_image()?.save(&wired)?;
        println!("Wrote {}", wired.display());
    }

    Ok(())
}
