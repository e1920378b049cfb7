//! Unit handling for body measurements
//!
//! Heights are stored in centimeters internally and converted at the
//! boundary, so no calculation ever runs on an unparsed display string.
//!
//! # Design Principles
//!
//! 1. **Internal Consistency**: storage is metric (cm)
//! 2. **Explicit Parsing**: display strings like `5'11"` go through an
//!    explicit parse step with a real error, never a bare float parse
//! 3. **Conversion at Boundaries**: convert on input, not in calculations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EngineError;

// ============================================================================
// Height Units
// ============================================================================

/// Height unit accepted at the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Meters,
    Inches,
    FeetInches, // Stored as total inches
}

impl HeightUnit {
    /// Convert a value in this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Meters => value * 100.0,
            HeightUnit::Inches | HeightUnit::FeetInches => value * 2.54,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Meters => cm / 100.0,
            HeightUnit::Inches | HeightUnit::FeetInches => cm / 2.54,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Meters => "m",
            HeightUnit::Inches => "in",
            HeightUnit::FeetInches => "ft/in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Height Value
// ============================================================================

/// A parsed height, stored in centimeters
///
/// Construction validates the value, so a `Height` is always finite and
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    cm: f64,
}

impl Height {
    /// Create a height from centimeters
    pub fn from_cm(cm: f64) -> Result<Self, EngineError> {
        if !cm.is_finite() || cm <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "height must be a positive number of centimeters, got {}",
                cm
            )));
        }
        Ok(Self { cm })
    }

    /// Create a height from a value in the given unit
    pub fn from_value(value: f64, unit: HeightUnit) -> Result<Self, EngineError> {
        Self::from_cm(unit.to_cm(value))
    }

    /// Height in centimeters
    pub fn cm(&self) -> f64 {
        self.cm
    }

    /// Height in meters
    pub fn meters(&self) -> f64 {
        self.cm / 100.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} cm", self.cm)
    }
}

impl FromStr for Height {
    type Err = EngineError;

    /// Parse a height display string
    ///
    /// Accepted forms: `180cm`, `1.8m`, `71in`, and feet-and-inches like
    /// `5'11"` (the trailing quote is optional). Bare numbers are rejected
    /// as ambiguous.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::Parse("height string is empty".to_string()));
        }

        // Feet-and-inches form: 5'11"
        if let Some((feet_part, inches_part)) = trimmed.split_once('\'') {
            let feet: f64 = feet_part
                .trim()
                .parse()
                .map_err(|_| EngineError::Parse(format!("invalid feet value in {:?}", s)))?;
            let inches_str = inches_part.trim().trim_end_matches('"').trim();
            let inches: f64 = if inches_str.is_empty() {
                0.0
            } else {
                inches_str
                    .parse()
                    .map_err(|_| EngineError::Parse(format!("invalid inches value in {:?}", s)))?
            };
            if !(0.0..12.0).contains(&inches) {
                return Err(EngineError::Parse(format!(
                    "inches must be within 0-11, got {}",
                    inches
                )));
            }
            return Self::from_value(feet * 12.0 + inches, HeightUnit::Inches);
        }

        // Suffixed forms; "cm" must be tried before "m"
        let lower = trimmed.to_lowercase();
        for (suffix, unit) in [
            ("cm", HeightUnit::Cm),
            ("in", HeightUnit::Inches),
            ("m", HeightUnit::Meters),
        ] {
            if let Some(number) = lower.strip_suffix(suffix) {
                let value: f64 = number.trim().parse().map_err(|_| {
                    EngineError::Parse(format!("invalid height number in {:?}", s))
                })?;
                return Self::from_value(value, unit);
            }
        }

        Err(EngineError::Parse(format!(
            "unrecognized height format: {:?}",
            s
        )))
    }
}
