//! Input validation functions
//!
//! Boundary checks applied before records reach the calculators, so NaN
//! and out-of-range values never leak into the presentation layer.

use crate::models::StepsDatum;

/// Validate a ring trend percentage (0-100)
pub fn validate_trend(trend: u8) -> Result<(), String> {
    if trend > 100 {
        return Err(format!("Trend must be between 0 and 100, got {}", trend));
    }
    Ok(())
}

/// Validate a sleep quality score (0-100)
pub fn validate_sleep_quality(quality: f64) -> Result<(), String> {
    if quality.is_nan() || quality.is_infinite() {
        return Err("Sleep quality must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&quality) {
        return Err(format!(
            "Sleep quality must be between 0 and 100, got {}",
            quality
        ));
    }
    Ok(())
}

/// Validate hours slept in one night
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if hours < 0.0 {
        return Err("Sleep hours cannot be negative".to_string());
    }
    if hours > 24.0 {
        return Err("Sleep hours cannot exceed 24".to_string());
    }
    Ok(())
}

/// Validate a single day of the steps week
pub fn validate_steps_datum(datum: &StepsDatum) -> Result<(), String> {
    if datum.day.trim().is_empty() {
        return Err("Day label cannot be empty".to_string());
    }
    if datum.goal == 0 {
        return Err(format!("Step goal for {} must be positive", datum.day));
    }
    Ok(())
}

/// Validate an hour of the day (0-23)
pub fn validate_hour(hour: u32) -> Result<(), String> {
    if hour > 23 {
        return Err(format!("Hour must be between 0 and 23, got {}", hour));
    }
    Ok(())
}

/// Validate a goal title
pub fn validate_goal_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Goal title cannot be empty".to_string());
    }
    if title.len() > 120 {
        return Err("Goal title too long".to_string());
    }
    Ok(())
}

/// Validate a caller-supplied BMI value
///
/// The value is not range-clamped (classification is total over all
/// numbers), only required to be finite.
pub fn validate_bmi(bmi: f64) -> Result<(), String> {
    if bmi.is_nan() || bmi.is_infinite() {
        return Err("BMI must be a valid number".to_string());
    }
    Ok(())
}
