//! Sleep tracker card

use serde::Serialize;

use fitness_dashboard_engine::metrics::{sleep_gauge, SleepGauge};
use fitness_dashboard_engine::models::SleepNight;
use fitness_dashboard_engine::validation::{validate_sleep_hours, validate_sleep_quality};

use crate::cards::TrendDirection;
use crate::error::{AppError, AppResult};

/// View state for the sleep card
#[derive(Debug, Clone, Serialize)]
pub struct SleepCardView {
    pub hours: f64,
    pub quality: f64,
    pub gauge: SleepGauge,
    pub bed_time: String,
    pub wake_time: String,
    /// Change vs the previous night, percent
    pub change_percent: f64,
    pub change_direction: TrendDirection,
}

/// Build the sleep card from last night's record
pub fn view(night: &SleepNight) -> AppResult<SleepCardView> {
    validate_sleep_quality(night.quality).map_err(AppError::Validation)?;
    validate_sleep_hours(night.hours).map_err(AppError::Validation)?;

    let gauge = sleep_gauge(night.quality, night.hours)?;

    Ok(SleepCardView {
        hours: night.hours,
        quality: night.quality,
        gauge,
        bed_time: night.bed_time.clone(),
        wake_time: night.wake_time.clone(),
        change_percent: night.change_percent,
        change_direction: TrendDirection::from_value(night.change_percent),
    })
}
