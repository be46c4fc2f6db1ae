//! Core data structures and traits for lowpoly
//!
//! This crate provides the fundamental types shared by every stage of the
//! low-poly pipeline: pixel buffers, normalized points, edge masks, triangles,
//! and the traits that connect the stages to a triangulator and a render target.

pub mod point;
pub mod pixel;
pub mod mask;
pub mod mesh;
pub mod traits;
pub mod error;

pub use point::*;
pub use pixel::*;
pub use mask::*;
pub use mesh::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::Point2;

// Type aliases for easier imports
pub type Point = Point2f;
