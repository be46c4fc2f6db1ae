//! Rasterization for low-poly meshes
//!
//! This crate draws triangle meshes onto render targets:
//! - Centroid color sampling from the source buffer
//! - Letterboxed mapping from normalized to target coordinates
//! - Optional wireframe overlay
//! - A `tiny-skia` backed [`Canvas`] render target

pub mod canvas;
pub mod rasterizer;
pub mod viewport;

pub use canvas::*;
pub use rasterizer::*;
pub use viewport::*;
