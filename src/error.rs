// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeomError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Degenerate geometry: {operation}")]
    DegenerateGeometry { operation: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },
}

pub type GeomResult<T> = Result<T, GeomError>;
