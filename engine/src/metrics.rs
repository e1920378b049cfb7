//! Derived metric calculations for the dashboard cards
//!
//! Every card receives a record of raw inputs and passes it through one or
//! more of these functions before rendering.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no clock reads, no side effects
//! 2. **Explicit Failure**: empty windows and zero denominators are
//!    rejected with [`EngineError::InvalidInput`] instead of producing
//!    NaN or infinity
//! 3. **Type Safety**: categories and ratings are enums, not strings

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::StepsDatum;
use crate::units::Height;

// ============================================================================
// BMI Classification
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Display color for the BMI progress bar
    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#3B82F6",
            BmiCategory::Normal => "#22C55E",
            BmiCategory::Overweight => "#EAB308",
            BmiCategory::Obese => "#EF4444",
        }
    }
}

/// Classify BMI into category
///
/// Thresholds are half-open: `<18.5` underweight, `<25` normal, `<30`
/// overweight, otherwise obese. Out-of-range values pass through the same
/// thresholds; only the display ratio is clamped.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Progress-bar fill ratio for a BMI value
///
/// `min(bmi * 2.5, 100) / 100`, clamped to `[0, 1]`.
pub fn bmi_fill_ratio(bmi: f64) -> f64 {
    ((bmi * 2.5).min(100.0) / 100.0).clamp(0.0, 1.0)
}

/// BMI value with its presentation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
    /// Progress-bar fill, 0-1
    pub fill_ratio: f64,
}

/// Compute the complete BMI reading for the body card
///
/// The BMI value itself is caller-supplied and passed through unclamped,
/// but it must be a finite number.
pub fn bmi_reading(bmi: f64) -> Result<BmiReading, EngineError> {
    if !bmi.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "BMI must be a finite number, got {}",
            bmi
        )));
    }
    Ok(BmiReading {
        value: bmi,
        category: classify_bmi(bmi),
        fill_ratio: bmi_fill_ratio(bmi),
    })
}

// ============================================================================
// Sleep Gauge
// ============================================================================

/// Fraction of total sleep treated as deep sleep
const DEEP_SLEEP_FRACTION: f64 = 0.25;

/// Semicircular gauge sweep for a 0-100 quality score
///
/// 0° = empty, 180° = full. The visual clip geometry derived from this
/// angle is a rendering concern; the angle alone is the contract.
pub fn gauge_angle_degrees(quality: f64) -> f64 {
    (quality / 100.0) * 180.0
}

/// Deep sleep estimate in whole hours: `round(hours * 0.25)`
pub fn deep_sleep_hours(sleep_hours: f64) -> f64 {
    (sleep_hours * DEEP_SLEEP_FRACTION).round()
}

/// Sleep quality rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SleepRating {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SleepRating::Excellent => "Excellent",
            SleepRating::Good => "Good",
            SleepRating::Fair => "Fair",
            SleepRating::Poor => "Poor",
        }
    }
}

/// Rate a 0-100 quality score
///
/// `>=80` excellent, `>=60` good, `>=40` fair, otherwise poor.
pub fn rate_sleep_quality(quality: f64) -> SleepRating {
    if quality >= 80.0 {
        SleepRating::Excellent
    } else if quality >= 60.0 {
        SleepRating::Good
    } else if quality >= 40.0 {
        SleepRating::Fair
    } else {
        SleepRating::Poor
    }
}

/// Gauge state for the sleep card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepGauge {
    pub angle_degrees: f64,
    pub deep_sleep_hours: f64,
    pub rating: SleepRating,
}

/// Compute the sleep gauge from a quality score and hours slept
///
/// Quality must be within `[0, 100]` and hours finite and non-negative.
pub fn sleep_gauge(quality: f64, sleep_hours: f64) -> Result<SleepGauge, EngineError> {
    if !(0.0..=100.0).contains(&quality) {
        return Err(EngineError::InvalidInput(format!(
            "sleep quality must be within 0-100, got {}",
            quality
        )));
    }
    if !sleep_hours.is_finite() || sleep_hours < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "sleep hours must be non-negative, got {}",
            sleep_hours
        )));
    }
    Ok(SleepGauge {
        angle_degrees: gauge_angle_degrees(quality),
        deep_sleep_hours: deep_sleep_hours(sleep_hours),
        rating: rate_sleep_quality(quality),
    })
}

// ============================================================================
// Step Aggregation
// ============================================================================

/// Aggregate statistics over an ordered window of daily step counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsSummary {
    pub total_steps: u64,
    /// Rounded per-day average
    pub average_steps: u64,
    /// Last day minus first day; zero is neutral for display
    pub trend: i64,
    /// Rounded percentage of the summed goals reached
    pub goal_progress_percent: i64,
}

/// Reduce an ordered window of step/goal pairs
///
/// The window must be non-empty and the summed goal positive; both are
/// checked explicitly rather than left to floating-point division. A
/// single-entry window has trend 0 (first and last are the same element).
pub fn aggregate_steps(data: &[StepsDatum]) -> Result<StepsSummary, EngineError> {
    let (Some(first), Some(last)) = (data.first(), data.last()) else {
        return Err(EngineError::InvalidInput(
            "step window is empty".to_string(),
        ));
    };

    let total_steps: u64 = data.iter().map(|d| u64::from(d.steps)).sum();
    let goal_total: u64 = data.iter().map(|d| u64::from(d.goal)).sum();
    if goal_total == 0 {
        return Err(EngineError::InvalidInput(
            "step goals sum to zero".to_string(),
        ));
    }

    let average_steps = (total_steps as f64 / data.len() as f64).round() as u64;
    let trend = i64::from(last.steps) - i64::from(first.steps);
    let goal_progress_percent =
        (total_steps as f64 / goal_total as f64 * 100.0).round() as i64;

    Ok(StepsSummary {
        total_steps,
        average_steps,
        trend,
        goal_progress_percent,
    })
}

// ============================================================================
// Points Progress
// ============================================================================

/// Progress toward a monthly points goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsProgress {
    /// Percent toward the goal, clamped to [0, 100]
    pub percent: f64,
    pub goal_reached: bool,
    /// Points still needed; zero once the goal is reached
    pub points_remaining: i64,
}

/// Compute monthly points progress
///
/// `percent = min(points / monthly_goal * 100, 100)`. The goal must be
/// positive and the points non-negative.
pub fn points_progress(points: i64, monthly_goal: i64) -> Result<PointsProgress, EngineError> {
    if monthly_goal <= 0 {
        return Err(EngineError::InvalidInput(format!(
            "monthly goal must be positive, got {}",
            monthly_goal
        )));
    }
    if points < 0 {
        return Err(EngineError::InvalidInput(format!(
            "points must be non-negative, got {}",
            points
        )));
    }

    let percent = (points as f64 / monthly_goal as f64 * 100.0).min(100.0);
    Ok(PointsProgress {
        percent,
        goal_reached: percent >= 100.0,
        points_remaining: (monthly_goal - points).max(0),
    })
}

// ============================================================================
// Body Composition
// ============================================================================

/// Age assumed by the BMI-based body-fat estimate
const ASSUMED_AGE_YEARS: f64 = 30.0;

/// Estimate body fat percentage from BMI (rough estimate)
///
/// Formula: `round(1.2 * BMI + 0.23 * age - 5.4)` with a fixed assumed
/// age. Actual measurement is more accurate.
pub fn estimate_body_fat_percent(bmi: f64) -> Result<i32, EngineError> {
    if !bmi.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "BMI must be a finite number, got {}",
            bmi
        )));
    }
    Ok((1.2 * bmi + 0.23 * ASSUMED_AGE_YEARS - 5.4).round() as i32)
}

/// Ideal weight range in kg for a height
///
/// Based on BMI 18.5-24.9 over height in meters squared.
pub fn ideal_weight_range_kg(height: Height) -> (f64, f64) {
    let height_m_sq = height.meters() * height.meters();
    (18.5 * height_m_sq, 24.9 * height_m_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[rstest]
    #[case(15.0, BmiCategory::Underweight)]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(22.0, BmiCategory::Normal)]
    #[case(24.999, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.999, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(42.0, BmiCategory::Obese)]
    fn test_bmi_category_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_fill_ratio() {
        assert!((bmi_fill_ratio(23.1) - 0.5775).abs() < 1e-9);
        assert!((bmi_fill_ratio(40.0) - 1.0).abs() < 1e-9);
        assert!((bmi_fill_ratio(50.0) - 1.0).abs() < 1e-9);
        assert!((bmi_fill_ratio(-5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_reading_rejects_non_finite() {
        assert!(bmi_reading(f64::NAN).is_err());
        assert!(bmi_reading(f64::INFINITY).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: fill ratio matches the formula for non-negative BMI
        #[test]
        fn prop_fill_ratio_formula(bmi in 0.0f64..200.0) {
            let expected = (bmi * 2.5).min(100.0) / 100.0;
            prop_assert!((bmi_fill_ratio(bmi) - expected).abs() < 1e-12);
        }

        /// Property: every BMI lands in exactly one category
        #[test]
        fn prop_category_total(bmi in -100.0f64..200.0) {
            // classify_bmi is total; description never panics
            let _ = classify_bmi(bmi).description();
        }
    }

    // =========================================================================
    // Sleep Gauge Tests
    // =========================================================================

    #[test]
    fn test_gauge_angle() {
        assert!((gauge_angle_degrees(0.0)).abs() < 1e-9);
        assert!((gauge_angle_degrees(50.0) - 90.0).abs() < 1e-9);
        assert!((gauge_angle_degrees(85.0) - 153.0).abs() < 1e-9);
        assert!((gauge_angle_degrees(100.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_deep_sleep_hours() {
        // 7.5 hours -> round(1.875) = 2
        assert!((deep_sleep_hours(7.5) - 2.0).abs() < 1e-9);
        assert!((deep_sleep_hours(8.0) - 2.0).abs() < 1e-9);
        assert!((deep_sleep_hours(10.0) - 3.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(85.0, SleepRating::Excellent)]
    #[case(80.0, SleepRating::Excellent)]
    #[case(79.9, SleepRating::Good)]
    #[case(60.0, SleepRating::Good)]
    #[case(59.9, SleepRating::Fair)]
    #[case(40.0, SleepRating::Fair)]
    #[case(39.9, SleepRating::Poor)]
    #[case(0.0, SleepRating::Poor)]
    fn test_sleep_rating_boundaries(#[case] quality: f64, #[case] expected: SleepRating) {
        assert_eq!(rate_sleep_quality(quality), expected);
    }

    #[test]
    fn test_sleep_gauge_rejects_out_of_range_quality() {
        assert!(sleep_gauge(-1.0, 7.5).is_err());
        assert!(sleep_gauge(101.0, 7.5).is_err());
        assert!(sleep_gauge(f64::NAN, 7.5).is_err());
        assert!(sleep_gauge(85.0, f64::NAN).is_err());
        assert!(sleep_gauge(85.0, -1.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: gauge angle is quality * 1.8 and stays within [0, 180]
        #[test]
        fn prop_gauge_angle(quality in 0.0f64..=100.0) {
            let angle = gauge_angle_degrees(quality);
            prop_assert!((angle - quality * 1.8).abs() < 1e-9);
            prop_assert!((0.0..=180.0).contains(&angle));
        }

        /// Property: gauge angle is monotonic non-decreasing in quality
        #[test]
        fn prop_gauge_angle_monotonic(q1 in 0.0f64..=100.0, q2 in 0.0f64..=100.0) {
            let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
            prop_assert!(gauge_angle_degrees(lo) <= gauge_angle_degrees(hi));
        }
    }

    // =========================================================================
    // Step Aggregation Tests
    // =========================================================================

    fn sample_week() -> Vec<StepsDatum> {
        [
            ("Mon", 8432),
            ("Tue", 7891),
            ("Wed", 9283),
            ("Thu", 12483),
            ("Fri", 11092),
            ("Sat", 8129),
            ("Sun", 7438),
        ]
        .into_iter()
        .map(|(day, steps)| StepsDatum {
            day: day.to_string(),
            steps,
            goal: 10_000,
        })
        .collect()
    }

    #[test]
    fn test_aggregate_sample_week() {
        let summary = aggregate_steps(&sample_week()).unwrap();
        assert_eq!(summary.total_steps, 64_748);
        assert_eq!(summary.average_steps, 9_250);
        assert_eq!(summary.trend, -994);
        assert_eq!(summary.goal_progress_percent, 92);
    }

    #[test]
    fn test_aggregate_empty_window_fails() {
        let err = aggregate_steps(&[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_aggregate_zero_goals_fail() {
        let data = vec![StepsDatum {
            day: "Mon".to_string(),
            steps: 100,
            goal: 0,
        }];
        assert!(aggregate_steps(&data).is_err());
    }

    #[test]
    fn test_single_entry_trend_is_zero() {
        let data = vec![StepsDatum {
            day: "Mon".to_string(),
            steps: 8432,
            goal: 10_000,
        }];
        let summary = aggregate_steps(&data).unwrap();
        assert_eq!(summary.trend, 0);
        assert_eq!(summary.average_steps, 8432);
        assert_eq!(summary.goal_progress_percent, 84);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the total is never below the average
        #[test]
        fn prop_total_at_least_average(
            steps in proptest::collection::vec(0u32..50_000, 1..14)
        ) {
            let data: Vec<StepsDatum> = steps
                .into_iter()
                .map(|s| StepsDatum { day: "Day".to_string(), steps: s, goal: 10_000 })
                .collect();
            let summary = aggregate_steps(&data).unwrap();
            prop_assert!(summary.total_steps >= summary.average_steps);
        }
    }

    // =========================================================================
    // Points Progress Tests
    // =========================================================================

    #[rstest]
    #[case(750, 1000, 75.0, false)]
    #[case(1000, 1000, 100.0, true)]
    #[case(1200, 1000, 100.0, true)]
    #[case(0, 1000, 0.0, false)]
    fn test_points_progress(
        #[case] points: i64,
        #[case] goal: i64,
        #[case] expected_percent: f64,
        #[case] expected_reached: bool,
    ) {
        let progress = points_progress(points, goal).unwrap();
        assert!((progress.percent - expected_percent).abs() < 1e-9);
        assert_eq!(progress.goal_reached, expected_reached);
    }

    #[test]
    fn test_points_remaining() {
        assert_eq!(points_progress(750, 1000).unwrap().points_remaining, 250);
        assert_eq!(points_progress(1200, 1000).unwrap().points_remaining, 0);
    }

    #[test]
    fn test_points_invalid_inputs() {
        assert!(points_progress(750, 0).is_err());
        assert!(points_progress(750, -10).is_err());
        assert!(points_progress(-1, 1000).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: percent is always clamped to [0, 100]
        #[test]
        fn prop_percent_clamped(points in 0i64..10_000_000, goal in 1i64..1_000_000) {
            let progress = points_progress(points, goal).unwrap();
            prop_assert!((0.0..=100.0).contains(&progress.percent));
            prop_assert_eq!(progress.goal_reached, progress.percent >= 100.0);
        }
    }

    // =========================================================================
    // Body Composition Tests
    // =========================================================================

    #[test]
    fn test_body_fat_estimate() {
        // round(1.2 * 23.1 + 0.23 * 30 - 5.4) = round(29.22) = 29
        assert_eq!(estimate_body_fat_percent(23.1).unwrap(), 29);
        assert!(estimate_body_fat_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_ideal_weight_range() {
        let height = Height::from_cm(180.0).unwrap();
        let (min, max) = ideal_weight_range_kg(height);
        assert!((min - 59.94).abs() < 0.01);
        assert!((max - 80.676).abs() < 0.01);
        assert!(min < max);
    }
}
