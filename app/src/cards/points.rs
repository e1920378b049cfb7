//! Achievement points card

use serde::Serialize;

use fitness_dashboard_engine::metrics::{points_progress, PointsProgress};

use crate::clock::Clock;
use crate::error::AppResult;

/// View state for the points card
#[derive(Debug, Clone, Serialize)]
pub struct PointsCardView {
    pub points: i64,
    pub monthly_goal: i64,
    pub progress: PointsProgress,
    /// Month-and-year header, from the injected clock
    pub month_label: String,
}

/// Build the points card
pub fn view(points: i64, monthly_goal: i64, clock: &dyn Clock) -> AppResult<PointsCardView> {
    let progress = points_progress(points, monthly_goal)?;
    Ok(PointsCardView {
        points,
        monthly_goal,
        progress,
        month_label: clock.month_label(),
    })
}
