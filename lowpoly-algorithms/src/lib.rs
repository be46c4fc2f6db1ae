//! # Lowpoly Algorithms
//!
//! Image analysis stages of the low-poly pipeline.
//!
//! This crate turns a pixel buffer into the vertex set of a low-poly mesh:
//! a cheap gradient-based edge mask, and a point sampler that biases part of
//! its budget toward edge pixels.

pub mod edges;
pub mod sampling;

// Re-export commonly used items
pub use edges::*;
pub use sampling::*;
