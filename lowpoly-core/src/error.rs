//! Error types for lowpoly

use thiserror::Error;

/// Main error type for lowpoly operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Triangulation error: {0}")]
    Triangulation(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for lowpoly operations
pub type Result<T> = std::result::Result<T, Error>;
