//! Time-of-day greeting selection
//!
//! The mapping takes the current hour as a parameter; reading the wall
//! clock is the caller's job (the app layer injects a clock).

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Part of the day the dashboard greets for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Resolve the time of day for an hour in `[0, 23]`
    ///
    /// `[5, 12)` morning, `[12, 17)` afternoon, `[17, 20)` evening,
    /// everything else night.
    pub fn from_hour(hour: u32) -> Result<Self, EngineError> {
        if hour > 23 {
            return Err(EngineError::InvalidInput(format!(
                "hour must be within 0-23, got {}",
                hour
            )));
        }
        Ok(match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=19 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        })
    }

    /// Greeting line shown in the header
    pub fn greeting(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good morning",
            TimeOfDay::Afternoon => "Good afternoon",
            TimeOfDay::Evening => "Good evening",
            TimeOfDay::Night => "Good night",
        }
    }

    /// Icon shown next to the greeting
    pub fn icon(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "sunrise",
            TimeOfDay::Afternoon => "sun",
            TimeOfDay::Evening => "sunset",
            TimeOfDay::Night => "moon",
        }
    }

    /// Gradient stops behind the icon
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            TimeOfDay::Morning => ("#EAB308", "#F97316"),
            TimeOfDay::Afternoon => ("#3B82F6", "#06B6D4"),
            TimeOfDay::Evening => ("#F97316", "#EC4899"),
            TimeOfDay::Night => ("#2563EB", "#4F46E5"),
        }
    }
}
