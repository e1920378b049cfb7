//! Hard-coded sample dataset the dashboard renders out of the box

use crate::errors::EngineResult;
use crate::models::{
    ActivitySummary, BodyMeasurements, Goal, Intensity, Metric, MetricLabel, MetricUnit,
    SleepNight, StepsDatum, Workout,
};
use crate::state::DashboardState;

/// Points collected so far this month
pub const CURRENT_POINTS: i64 = 750;

/// Monthly points target
pub const MONTHLY_POINTS_GOAL: i64 = 1_000;

/// The sample week of steps, one entry per day
pub fn weekly_steps() -> Vec<StepsDatum> {
    [
        ("Mon", 8_432),
        ("Tue", 7_891),
        ("Wed", 9_283),
        ("Thu", 12_483),
        ("Fri", 11_092),
        ("Sat", 8_129),
        ("Sun", 7_438),
    ]
    .into_iter()
    .map(|(day, steps)| StepsDatum {
        day: day.to_string(),
        steps,
        goal: 10_000,
    })
    .collect()
}

/// Activity-ring metrics at their initial values
pub fn initial_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: MetricLabel::Move,
            value: "420".to_string(),
            trend: 85,
            unit: MetricUnit::Cal,
        },
        Metric {
            label: MetricLabel::Exercise,
            value: "35".to_string(),
            trend: 70,
            unit: MetricUnit::Min,
        },
        Metric {
            label: MetricLabel::Stand,
            value: "10".to_string(),
            trend: 83,
            unit: MetricUnit::Hrs,
        },
    ]
}

/// Daily goals at their initial values
pub fn initial_goals() -> Vec<Goal> {
    vec![
        Goal {
            is_completed: true,
            ..Goal::new("30min Morning Yoga")
        },
        Goal::new("10k Steps"),
        Goal {
            is_completed: true,
            ..Goal::new("Drink 2L Water")
        },
    ]
}

/// Last night's sleep record
pub fn sleep_last_night() -> SleepNight {
    SleepNight {
        hours: 7.5,
        quality: 85.0,
        bed_time: "10:30 PM".to_string(),
        wake_time: "6:00 AM".to_string(),
        change_percent: 20.0,
    }
}

/// Profile body measurements
pub fn body_measurements() -> EngineResult<BodyMeasurements> {
    Ok(BodyMeasurements {
        height: "5'11\"".parse()?,
        weight_label: "165 lbs".to_string(),
        bmi: 23.1,
    })
}

/// Today's activity totals
pub fn activity_summary() -> ActivitySummary {
    ActivitySummary {
        calories: 1_250,
        active_minutes: 45,
        heart_rate_bpm: 72,
    }
}

/// Today's logged workouts
pub fn workouts() -> Vec<Workout> {
    vec![
        Workout {
            name: "Morning Run".to_string(),
            duration_minutes: 30,
            calories: 320,
            intensity: Intensity::High,
        },
        Workout {
            name: "Weight Training".to_string(),
            duration_minutes: 45,
            calories: 280,
            intensity: Intensity::Medium,
        },
        Workout {
            name: "Evening Walk".to_string(),
            duration_minutes: 20,
            calories: 110,
            intensity: Intensity::Low,
        },
    ]
}

/// The full initial dashboard state
pub fn initial_state() -> DashboardState {
    DashboardState {
        goals: initial_goals(),
        metrics: initial_metrics(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate_steps;

    #[test]
    fn test_sample_week_reproduces_known_aggregates() {
        let summary = aggregate_steps(&weekly_steps()).unwrap();
        assert_eq!(summary.total_steps, 64_748);
        assert_eq!(summary.average_steps, 9_250);
        assert_eq!(summary.trend, -994);
        assert_eq!(summary.goal_progress_percent, 92);
    }

    #[test]
    fn test_sample_height_parses() {
        let body = body_measurements().unwrap();
        assert!((body.height.cm() - 180.34).abs() < 0.01);
    }

    #[test]
    fn test_initial_state_shape() {
        let state = initial_state();
        assert_eq!(state.goals.len(), 3);
        assert_eq!(state.metrics.len(), 3);
        assert_eq!(state.completed_goals(), 2);
    }
}
