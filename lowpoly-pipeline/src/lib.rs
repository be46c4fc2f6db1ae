//! # Lowpoly Pipeline
//!
//! Drives the low-poly stages end to end.
//!
//! Each pass runs edge detection, point sampling, triangulation and
//! rasterization on a private [`PipelineState`]. Nothing is cached between
//! passes. [`LowPolyPipeline`] runs single passes for still images and
//! [`VideoDriver`] repeats them once per frame of a [`FrameClock`] until
//! stopped.

pub mod config;
pub mod state;
pub mod driver;
pub mod video;

// Re-export commonly used items
pub use config::*;
pub use state::*;
pub use driver::*;
pub use video::*;
