//! Fitness Dashboard
//!
//! Composes the dashboard cards from the sample dataset plus configuration
//! overrides, logs the rendered view-models, and keeps the greeting ticker
//! running until shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitness_dashboard_app::cards;
use fitness_dashboard_app::clock::{Clock, SystemClock};
use fitness_dashboard_app::config::AppConfig;
use fitness_dashboard_app::ticker::GreetingTicker;
use fitness_dashboard_engine::models::BodyMeasurements;
use fitness_dashboard_engine::sample;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting Fitness Dashboard"
    );

    let clock = Arc::new(SystemClock);
    render_dashboard(&config, clock.as_ref())?;

    // Start the per-minute greeting refresh
    let mut ticker = GreetingTicker::new(
        clock,
        Duration::from_secs(config.greeting.refresh_secs),
    )?;
    let mut updates = ticker.subscribe();
    ticker.start();
    info!(
        refresh_secs = config.greeting.refresh_secs,
        "Greeting ticker running; press ctrl-c to exit"
    );

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let header = cards::header::view(*updates.borrow_and_update(), &config.profile.name);
                info!(greeting = %header.greeting, icon = %header.icon, "Time of day changed");
            }
        }
    }

    // Tear the timer down before exiting
    ticker.stop();
    info!("Dashboard shutdown complete");
    Ok(())
}

/// Compute and log every card view-model once
fn render_dashboard(config: &AppConfig, clock: &dyn Clock) -> Result<()> {
    let header = cards::header::view(
        fitness_dashboard_engine::TimeOfDay::from_hour(clock.current_hour())?,
        &config.profile.name,
    );
    info!(greeting = %header.greeting, profile = %header.profile_name, "Header");

    let steps = cards::steps::view(&sample::weekly_steps())?;
    info!(
        total = steps.summary.total_steps,
        average = steps.summary.average_steps,
        trend = steps.summary.trend,
        progress_percent = steps.summary.goal_progress_percent,
        direction = ?steps.direction,
        "Weekly steps"
    );

    let sleep = cards::sleep::view(&sample::sleep_last_night())?;
    info!(
        hours = sleep.hours,
        gauge_degrees = sleep.gauge.angle_degrees,
        deep_sleep_hours = sleep.gauge.deep_sleep_hours,
        rating = ?sleep.gauge.rating,
        "Sleep"
    );

    let body = cards::body::view(&BodyMeasurements {
        height: config.profile.height.parse()?,
        weight_label: config.profile.weight.clone(),
        bmi: config.profile.bmi,
    })?;
    info!(
        bmi = body.bmi.value,
        category = body.bmi.category.description(),
        fill_ratio = body.bmi.fill_ratio,
        body_fat_percent = body.body_fat_percent,
        "Body metrics"
    );

    let points = cards::points::view(
        sample::CURRENT_POINTS,
        config.points.monthly_goal,
        clock,
    )?;
    info!(
        points = points.points,
        goal = points.monthly_goal,
        percent = points.progress.percent,
        goal_reached = points.progress.goal_reached,
        month = %points.month_label,
        "Achievement points"
    );

    let activity = cards::activity::view(&sample::initial_state())?;
    info!(
        rings = activity.metrics.len(),
        goals = activity.goals.len(),
        completed = activity.completed_goals,
        "Activity"
    );

    let fitness = cards::fitness::view(sample::activity_summary(), &sample::workouts())?;
    info!(
        calories = fitness.summary.calories,
        active_minutes = fitness.summary.active_minutes,
        workout_minutes = fitness.total_workout_minutes,
        workout_calories = fitness.total_workout_calories,
        "Fitness activity"
    );

    let steps_json = serde_json::to_string(&steps)?;
    debug!(steps = %steps_json, "Steps card JSON");

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "fitness_dashboard=info,fitness_dashboard_app=info".into()
        } else {
            "fitness_dashboard=debug,fitness_dashboard_app=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
