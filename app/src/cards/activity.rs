//! Activity rings and daily goals card

use serde::Serialize;

use fitness_dashboard_engine::models::{Goal, MetricLabel, MetricUnit};
use fitness_dashboard_engine::state::DashboardState;
use fitness_dashboard_engine::validation::{validate_goal_title, validate_trend};

use crate::error::{AppError, AppResult};

/// A single ring with its resolved color
#[derive(Debug, Clone, Serialize)]
pub struct MetricView {
    pub label: MetricLabel,
    pub value: String,
    pub trend: u8,
    pub unit: MetricUnit,
    pub color: String,
}

/// View state for the activity card
#[derive(Debug, Clone, Serialize)]
pub struct ActivityCardView {
    pub metrics: Vec<MetricView>,
    pub goals: Vec<Goal>,
    pub completed_goals: usize,
}

/// Build the activity card from the current dashboard state
pub fn view(state: &DashboardState) -> AppResult<ActivityCardView> {
    let mut metrics = Vec::with_capacity(state.metrics.len());
    for metric in &state.metrics {
        validate_trend(metric.trend).map_err(AppError::Validation)?;
        metrics.push(MetricView {
            label: metric.label,
            value: metric.value.clone(),
            trend: metric.trend,
            unit: metric.unit,
            color: metric.label.color().to_string(),
        });
    }
    for goal in &state.goals {
        validate_goal_title(&goal.title).map_err(AppError::Validation)?;
    }

    Ok(ActivityCardView {
        metrics,
        goals: state.goals.clone(),
        completed_goals: state.completed_goals(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_dashboard_engine::models::Metric;
    use fitness_dashboard_engine::sample;

    #[test]
    fn test_activity_card_from_initial_state() {
        let card = view(&sample::initial_state()).unwrap();
        assert_eq!(card.metrics.len(), 3);
        assert_eq!(card.goals.len(), 3);
        assert_eq!(card.completed_goals, 2);
        assert_eq!(card.metrics[0].color, "#FF2D55");
        assert_eq!(card.metrics[1].color, "#2CD758");
        assert_eq!(card.metrics[2].color, "#007AFF");
    }

    #[test]
    fn test_toggling_a_goal_updates_the_card() {
        use fitness_dashboard_engine::state::{reduce, DashboardAction};

        let state = sample::initial_state();
        let open_goal = state.goals[1].id;

        let next = reduce(state, DashboardAction::ToggleGoal(open_goal));
        let card = view(&next).unwrap();
        assert_eq!(card.completed_goals, 3);

        // Unknown ids leave the card unchanged
        let next = reduce(next, DashboardAction::ToggleGoal(uuid::Uuid::new_v4()));
        let card = view(&next).unwrap();
        assert_eq!(card.completed_goals, 3);
    }

    #[test]
    fn test_activity_card_rejects_out_of_range_trend() {
        let mut state = sample::initial_state();
        state.metrics[0] = Metric {
            trend: 140,
            ..state.metrics[0].clone()
        };
        assert!(matches!(view(&state), Err(AppError::Validation(_))));
    }
}
