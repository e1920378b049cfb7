//! Card view-models
//!
//! One module per dashboard card. Each builder validates its raw inputs,
//! runs them through the engine's calculators, and assembles a
//! serializable view struct for the rendering layer.

pub mod activity;
pub mod body;
pub mod fitness;
pub mod header;
pub mod points;
pub mod sleep;
pub mod steps;

use serde::Serialize;

/// Direction of a trend indicator
///
/// Zero is neutral rather than an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Classify a signed trend value
    pub fn from_value(trend: f64) -> Self {
        if trend > 0.0 {
            TrendDirection::Up
        } else if trend < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}
