//! Fitness Dashboard WASM Module
//!
//! This crate provides WebAssembly bindings for the dashboard's derived
//! metric calculations so a browser host can run them client-side.

use wasm_bindgen::prelude::*;

use fitness_dashboard_engine::metrics;
use fitness_dashboard_engine::models::StepsDatum;

/// BMI category label for a BMI value
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    metrics::classify_bmi(bmi).description().to_string()
}

/// Progress-bar fill ratio for a BMI value, 0-1
#[wasm_bindgen]
pub fn bmi_fill_ratio(bmi: f64) -> f64 {
    metrics::bmi_fill_ratio(bmi)
}

/// Semicircular gauge sweep in degrees for a 0-100 sleep quality score
#[wasm_bindgen]
pub fn gauge_angle_degrees(quality: f64) -> f64 {
    metrics::gauge_angle_degrees(quality)
}

/// Deep sleep estimate in whole hours
#[wasm_bindgen]
pub fn deep_sleep_hours(sleep_hours: f64) -> f64 {
    metrics::deep_sleep_hours(sleep_hours)
}

/// Percent toward a monthly points goal, clamped to 0-100
///
/// Returns 0 for a zero goal rather than dividing by it.
#[wasm_bindgen]
pub fn points_percent(points: u32, monthly_goal: u32) -> f64 {
    if monthly_goal == 0 {
        return 0.0;
    }
    (f64::from(points) / f64::from(monthly_goal) * 100.0).min(100.0)
}

/// BMI-based body fat estimate, rounded percent
///
/// Returns 0 for a non-finite BMI.
#[wasm_bindgen]
pub fn body_fat_percent(bmi: f64) -> i32 {
    metrics::estimate_body_fat_percent(bmi).unwrap_or(0)
}

/// Total of a series of daily step counts
#[wasm_bindgen]
pub fn total_steps(steps: &[u32]) -> u32 {
    steps.iter().sum()
}

/// Rounded per-day average of a series of daily step counts
///
/// Returns 0 for an empty series.
#[wasm_bindgen]
pub fn average_steps(steps: &[u32]) -> u32 {
    if steps.is_empty() {
        return 0;
    }
    let total: u64 = steps.iter().map(|&s| u64::from(s)).sum();
    (total as f64 / steps.len() as f64).round() as u32
}

/// Aggregate a week of step/goal pairs and return the summary as JSON
///
/// Returns an empty string when the series is empty, the lengths differ,
/// or the goals sum to zero.
#[wasm_bindgen]
pub fn steps_summary_json(steps: &[u32], goals: &[u32]) -> String {
    if steps.len() != goals.len() {
        return String::new();
    }
    let data: Vec<StepsDatum> = steps
        .iter()
        .zip(goals)
        .map(|(&steps, &goal)| StepsDatum {
            day: String::new(),
            steps,
            goal,
        })
        .collect();
    match metrics::aggregate_steps(&data) {
        Ok(summary) => serde_json::to_string(&summary).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_category() {
        assert_eq!(bmi_category(23.1), "Normal");
        assert_eq!(bmi_category(31.0), "Obese");
    }

    #[test]
    fn test_gauge_angle() {
        assert!((gauge_angle_degrees(85.0) - 153.0).abs() < 0.001);
    }

    #[test]
    fn test_points_percent_defends_zero_goal() {
        assert!((points_percent(750, 1000) - 75.0).abs() < 0.001);
        assert!((points_percent(750, 0)).abs() < 0.001);
    }

    #[test]
    fn test_step_helpers() {
        let steps = [8432, 7891, 9283, 12483, 11092, 8129, 7438];
        assert_eq!(total_steps(&steps), 64748);
        assert_eq!(average_steps(&steps), 9250);
        assert_eq!(average_steps(&[]), 0);
    }

    #[test]
    fn test_steps_summary_json() {
        let steps = [8432, 7891, 9283, 12483, 11092, 8129, 7438];
        let goals = [10_000; 7];
        let json = steps_summary_json(&steps, &goals);
        assert!(json.contains("\"total_steps\":64748"));
        assert!(json.contains("\"trend\":-994"));

        assert_eq!(steps_summary_json(&[], &[]), "");
        assert_eq!(steps_summary_json(&steps, &goals[..3]), "");
    }
}
