//! # Lowpoly Reconstruction
//!
//! Mesh reconstruction from sampled point sets.
//!
//! This crate provides the triangulators used by the low-poly pipeline: a
//! robust planar Delaunay triangulation, a dependency-free randomized
//! fallback, and a strategy that runs the primary path and falls back on error.

pub mod delaunay;
pub mod random;
pub mod strategy;

// Re-export commonly used items
pub use delaunay::*;
pub use random::*;
pub use strategy::*;
