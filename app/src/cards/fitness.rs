//! Fitness activity card: daily totals plus logged workouts

use serde::Serialize;

use fitness_dashboard_engine::models::{ActivitySummary, Intensity, Workout};

use crate::error::AppResult;

/// A workout row with its resolved intensity color
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutView {
    pub name: String,
    pub duration_minutes: u32,
    pub calories: u32,
    pub intensity: Intensity,
    pub color: String,
}

/// View state for the fitness card
#[derive(Debug, Clone, Serialize)]
pub struct FitnessCardView {
    pub summary: ActivitySummary,
    pub workouts: Vec<WorkoutView>,
    pub total_workout_minutes: u32,
    pub total_workout_calories: u32,
}

/// Build the fitness card from today's totals and workouts
pub fn view(summary: ActivitySummary, workouts: &[Workout]) -> AppResult<FitnessCardView> {
    let total_workout_minutes = workouts.iter().map(|w| w.duration_minutes).sum();
    let total_workout_calories = workouts.iter().map(|w| w.calories).sum();

    Ok(FitnessCardView {
        summary,
        workouts: workouts
            .iter()
            .map(|w| WorkoutView {
                name: w.name.clone(),
                duration_minutes: w.duration_minutes,
                calories: w.calories,
                intensity: w.intensity,
                color: w.intensity.color().to_string(),
            })
            .collect(),
        total_workout_minutes,
        total_workout_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_dashboard_engine::sample;

    #[test]
    fn test_fitness_card_totals() {
        let card = view(sample::activity_summary(), &sample::workouts()).unwrap();
        assert_eq!(card.total_workout_minutes, 95);
        assert_eq!(card.total_workout_calories, 710);
        assert_eq!(card.workouts.len(), 3);
        assert_eq!(card.workouts[0].color, Intensity::High.color());
    }
}
