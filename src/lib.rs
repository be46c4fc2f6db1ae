//! # lowpoly
//!
//! Low-poly stylized rendering of still images and video frames.
//!
//! This is the umbrella crate that re-exports every lowpoly crate. Use it to
//! get everything in one place, or depend on individual crates for more
//! granular control over dependencies.
//!
//! ## Crates
//!
//! - **Core**: Pixel buffers, edge masks, triangles and the render/triangulate traits
//! - **Algorithms**: Edge detection and vertex sampling
//! - **Reconstruction**: Delaunay and randomized triangulation with fallback
//! - **Render**: Viewport mapping, flat-shaded rasterization and a tiny-skia canvas
//! - **Pipeline**: Still-image passes and the paced video loop
//!
//! ## Quick Start
//!
//! ```rust
//! use lowpoly::prelude::*;
//!
//! let frame = Frame::solid(64, 48, [30, 90, 160]);
//! let mut canvas = Canvas::new(128, 96).unwrap();
//! let mut pipeline = LowPolyPipeline::new(PipelineConfig::default().with_vertex_budget(100));
//!
//! let report = pipeline.run_pass(Some(&frame.view()), &mut canvas);
//! assert_eq!(report.point_count(), 100);
//! assert_eq!(canvas.pixel(64, 48), Some([30, 90, 160, 255]));
//! ```

pub use lowpoly_core::*;

pub use lowpoly_algorithms as algorithms;
pub use lowpoly_pipeline as pipeline;
pub use lowpoly_reconstruction as reconstruction;
pub use lowpoly_render as render;

/// Convenient imports for common use cases
pub mod prelude {
    pub use lowpoly_algorithms::*;
    pub use lowpoly_core::*;
    pub use lowpoly_pipeline::*;
    pub use lowpoly_reconstruction::*;
    pub use lowpoly_render::*;
}
