//! Low-poly renderer for still images and image sequences
//!
//! ```text
//! lowpoly image photo.jpg out.png --vertices 1500 --wireframe
//! lowpoly frames clip/ rendered/ --fps 24
//! ```
//!
//! Set `RUST_LOG` to control log output.

mod frames;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use frames::{load_frame, ImageSequence};
use lowpoly_pipeline::{IntervalClock, LowPolyPipeline, PassStatus, PipelineConfig, VideoDriver};
use lowpoly_reconstruction::TriangulatorKind;
use lowpoly_render::Canvas;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lowpoly")]
#[command(about = "Render images as flat-shaded low-poly meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single image
    Image {
        /// Source image
        input: PathBuf,

        /// Output PNG
        output: PathBuf,

        /// Output width; defaults to the source width
        #[arg(long)]
        width: Option<u32>,

        /// Output height; defaults to the source height
        #[arg(long)]
        height: Option<u32>,

        #[command(flatten)]
        options: RenderOptions,
    },

    /// Render every image in a directory as a paced frame sequence
    Frames {
        /// Directory of frames, played in file-name order
        dir: PathBuf,

        /// Directory for the rendered frames
        out_dir: PathBuf,

        /// Playback rate
        #[arg(long, default_value = "30")]
        fps: f64,

        #[command(flatten)]
        options: RenderOptions,
    },
}

#[derive(Args)]
struct RenderOptions {
    /// Vertex budget, including the four corners
    #[arg(short, long)]
    vertices: Option<usize>,

    /// Overlay triangle edges
    #[arg(long)]
    wireframe: bool,

    /// Triangulator: delaunay or random
    #[arg(long)]
    triangulator: Option<TriangulatorKind>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// TOML pipeline configuration; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderOptions {
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
            }
            None => PipelineConfig::default(),
        };

        if let Some(vertices) = self.vertices {
            config.vertex_budget = vertices;
        }
        if self.wireframe {
            config.wireframe = true;
        }
        if let Some(triangulator) = self.triangulator {
            config.triangulator = triangulator;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Image {
            input,
            output,
            width,
            height,
            options,
        } => render_image(&input, &output, width, height, &options),
        Commands::Frames {
            dir,
            out_dir,
            fps,
            options,
        } => render_frames(&dir, &out_dir, fps, &options),
    }
}

fn render_image(input: &Path, output: &Path, width: Option<u32>, height: Option<u32>, options: &RenderOptions) -> Result<()> {
    let frame = load_frame(input)?;
    let mut canvas = Canvas::new(width.unwrap_or(frame.width), height.unwrap_or(frame.height))?;
    let mut pipeline = LowPolyPipeline::new(options.pipeline_config()?);

    let report = pipeline.render_still(Some(&frame.view()), &mut canvas, |report| {
        if let PassStatus::Degraded { reason } = &report.status {
            warn!(%reason, "output is degraded");
        }
    });

    canvas
        .to_rgba_image()?
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        output = %output.display(),
        points = report.point_count(),
        triangles = report.triangle_count(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "image written"
    );
    Ok(())
}

fn render_frames(dir: &Path, out_dir: &Path, fps: f64, options: &RenderOptions) -> Result<()> {
    let mut source = ImageSequence::open(dir)?;
    let (width, height) = source.peek_dimensions()?;
    info!(frames = source.remaining(), fps, width, height, "starting playback");

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    // frames of a different size are letterboxed onto the first frame's canvas
    let mut canvas = Canvas::new(width, height)?;
    let mut driver = VideoDriver::new(LowPolyPipeline::new(options.pipeline_config()?));
    let mut clock = IntervalClock::from_fps(fps);
    let stop = driver.stop_handle();

    let mut written = 0u64;
    let mut write_error = None;

    let summary = driver.run(&mut source, &mut clock, &mut canvas, |_report, canvas| {
        let path = out_dir.join(format!("frame_{:05}.png", written));
        let result = canvas
            .to_rgba_image()
            .map_err(anyhow::Error::from)
            .and_then(|image| image.save(&path).map_err(anyhow::Error::from))
            .with_context(|| format!("failed to write {}", path.display()));

        match result {
            Ok(()) => written += 1,
            Err(err) => {
                write_error = Some(err);
                stop.stop();
            }
        }
    });

    if let Some(err) = write_error {
        return Err(err);
    }

    info!(
        written,
        skipped = summary.ticks_skipped,
        reason = ?summary.reason,
        "playback finished"
    );
    Ok(())
}
