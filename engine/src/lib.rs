//! Fitness Dashboard Engine
//!
//! This crate contains the derived-metric computations, data models, and
//! dashboard state shared by the application and WASM layers. Everything
//! here is pure: no clock reads, no I/O, no shared mutable state.

pub mod errors;
pub mod greeting;
pub mod metrics;
pub mod models;
pub mod sample;
pub mod state;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use greeting::TimeOfDay;
pub use metrics::*;
pub use state::{reduce, DashboardAction, DashboardState};
pub use units::{Height, HeightUnit};

// Export models (unit types are re-exported from units)
pub use models::{
    ActivitySummary, BodyMeasurements, Goal, Intensity, Metric, MetricLabel, MetricUnit,
    SleepNight, StepsDatum, Workout,
};
