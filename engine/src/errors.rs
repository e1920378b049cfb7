//! Error types for the dashboard engine

use thiserror::Error;

/// Errors surfaced by the derived-metric calculators
///
/// The taxonomy is deliberately small: malformed input is rejected at the
/// boundary instead of letting NaN or infinity reach the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for engine computations
pub type EngineResult<T> = Result<T, EngineError>;
