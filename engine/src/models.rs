//! Data models for the fitness dashboard
//!
//! Plain records consumed by the cards. Display colors are resolved through
//! exhaustive enum matches so every label is guaranteed a color at compile
//! time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units::Height;

/// A daily goal shown on the activity card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
}

impl Goal {
    /// Create a not-yet-completed goal with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
        }
    }
}

/// Activity-ring metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricLabel {
    Move,
    Exercise,
    Stand,
}

impl MetricLabel {
    /// Fixed display color for this ring
    pub fn color(&self) -> &'static str {
        match self {
            MetricLabel::Move => "#FF2D55",
            MetricLabel::Exercise => "#2CD758",
            MetricLabel::Stand => "#007AFF",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            MetricLabel::Move => "Move",
            MetricLabel::Exercise => "Exercise",
            MetricLabel::Stand => "Stand",
        }
    }
}

/// Unit attached to a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    Cal,
    Min,
    Hrs,
}

impl MetricUnit {
    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            MetricUnit::Cal => "cal",
            MetricUnit::Min => "min",
            MetricUnit::Hrs => "hrs",
        }
    }
}

/// Activity-ring metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: MetricLabel,
    pub value: String,
    /// Ring fill percentage, 0-100
    pub trend: u8,
    pub unit: MetricUnit,
}

/// One day of the steps week
///
/// Order within the week is significant: the first and last entries drive
/// the trend indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsDatum {
    pub day: String,
    pub steps: u32,
    pub goal: u32,
}

/// One night of sleep as supplied by the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepNight {
    pub hours: f64,
    /// Quality score, 0-100
    pub quality: f64,
    pub bed_time: String,
    pub wake_time: String,
    /// Change vs the previous night, percent
    pub change_percent: f64,
}

/// Body measurements as supplied by the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub height: Height,
    pub weight_label: String,
    pub bmi: f64,
}

/// Workout intensity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Badge color for this intensity
    pub fn color(&self) -> &'static str {
        match self {
            Intensity::Low => "#22C55E",
            Intensity::Medium => "#EAB308",
            Intensity::High => "#EF4444",
        }
    }
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    pub duration_minutes: u32,
    pub calories: u32,
    pub intensity: Intensity,
}

/// Day-level activity totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub calories: u32,
    pub active_minutes: u32,
    pub heart_rate_bpm: u32,
}
