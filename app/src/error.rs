//! Application error handling
//!
//! Wraps engine errors and boundary validation failures into a single
//! error type for the card builders and the binary.

use thiserror::Error;

use fitness_dashboard_engine::errors::EngineError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the application layer
pub type AppResult<T> = Result<T, AppError>;
