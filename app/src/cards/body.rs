//! Body metrics card

use serde::Serialize;

use fitness_dashboard_engine::metrics::{
    bmi_reading, estimate_body_fat_percent, ideal_weight_range_kg, BmiReading,
};
use fitness_dashboard_engine::models::BodyMeasurements;
use fitness_dashboard_engine::validation::validate_bmi;

use crate::error::{AppError, AppResult};

/// View state for the body metrics card
#[derive(Debug, Clone, Serialize)]
pub struct BodyCardView {
    pub height_label: String,
    pub weight_label: String,
    pub bmi: BmiReading,
    pub bmi_color: String,
    /// Ideal weight range in kg derived from the parsed height
    pub ideal_weight_kg: (f64, f64),
    /// BMI-based rough estimate
    pub body_fat_percent: i32,
}

/// Build the body card from profile measurements
pub fn view(body: &BodyMeasurements) -> AppResult<BodyCardView> {
    validate_bmi(body.bmi).map_err(AppError::Validation)?;

    let bmi = bmi_reading(body.bmi)?;
    let body_fat_percent = estimate_body_fat_percent(body.bmi)?;

    Ok(BodyCardView {
        height_label: body.height.to_string(),
        weight_label: body.weight_label.clone(),
        bmi_color: bmi.category.color().to_string(),
        ideal_weight_kg: ideal_weight_range_kg(body.height),
        bmi,
        body_fat_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_dashboard_engine::metrics::BmiCategory;
    use fitness_dashboard_engine::sample;

    #[test]
    fn test_body_card_from_sample_profile() {
        let card = view(&sample::body_measurements().unwrap()).unwrap();
        assert_eq!(card.bmi.category, BmiCategory::Normal);
        assert!((card.bmi.fill_ratio - 0.5775).abs() < 1e-9);
        assert_eq!(card.body_fat_percent, 29);
        // 1.8034 m -> roughly 60-81 kg
        assert!(card.ideal_weight_kg.0 > 59.0 && card.ideal_weight_kg.0 < 61.0);
        assert!(card.ideal_weight_kg.1 > 80.0 && card.ideal_weight_kg.1 < 82.0);
    }

    #[test]
    fn test_body_card_rejects_nan_bmi() {
        let mut body = sample::body_measurements().unwrap();
        body.bmi = f64::NAN;
        assert!(matches!(view(&body), Err(AppError::Validation(_))));
    }
}
