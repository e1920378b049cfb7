//! Dashboard header: greeting plus profile

use serde::Serialize;

use fitness_dashboard_engine::greeting::TimeOfDay;

/// View state for the dashboard header
#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub greeting: String,
    pub icon: String,
    pub gradient: (String, String),
    pub profile_name: String,
}

/// Build the header for a time of day
pub fn view(time_of_day: TimeOfDay, profile_name: &str) -> HeaderView {
    let (from, to) = time_of_day.gradient();
    HeaderView {
        greeting: time_of_day.greeting().to_string(),
        icon: time_of_day.icon().to_string(),
        gradient: (from.to_string(), to.to_string()),
        profile_name: profile_name.to_string(),
    }
}
