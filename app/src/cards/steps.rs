//! Weekly steps card

use serde::Serialize;

use fitness_dashboard_engine::metrics::{aggregate_steps, StepsSummary};
use fitness_dashboard_engine::models::StepsDatum;
use fitness_dashboard_engine::validation::validate_steps_datum;

use crate::cards::TrendDirection;
use crate::error::{AppError, AppResult};

/// View state for the weekly steps card
#[derive(Debug, Clone, Serialize)]
pub struct StepsCardView {
    pub summary: StepsSummary,
    pub direction: TrendDirection,
    /// Chart scale ceiling: tallest bar or goal line plus 10% headroom
    pub max_scale: f64,
    pub days: Vec<StepsDatum>,
}

/// Build the steps card from an ordered week of data
pub fn view(data: &[StepsDatum]) -> AppResult<StepsCardView> {
    for datum in data {
        validate_steps_datum(datum).map_err(AppError::Validation)?;
    }
    let summary = aggregate_steps(data)?;
    let tallest = data
        .iter()
        .map(|d| d.steps.max(d.goal))
        .max()
        .unwrap_or(0);

    Ok(StepsCardView {
        summary,
        direction: TrendDirection::from_value(summary.trend as f64),
        max_scale: f64::from(tallest) * 1.1,
        days: data.to_vec(),
    })
}
