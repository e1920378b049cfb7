//! Configuration management for the dashboard application
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FD__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    pub points: PointsConfig,
    pub greeting: GreetingConfig,
}

/// Profile shown in the header and body card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    /// Height display string; parsed through the engine's height contract
    pub height: String,
    pub weight: String,
    pub bmi: f64,
}

/// Points card configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsConfig {
    pub monthly_goal: i64,
}

/// Greeting refresh configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Seconds between time-of-day re-evaluations
    pub refresh_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig {
                name: "Jordan Lee".to_string(),
                height: "5'11\"".to_string(),
                weight: "165 lbs".to_string(),
                bmi: 23.1,
            },
            points: PointsConfig {
                monthly_goal: 1_000,
            },
            greeting: GreetingConfig { refresh_secs: 60 },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FD__ prefix
    ///   e.g., FD__POINTS__MONTHLY_GOAL=2000 sets points.monthly_goal
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("FD").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Whether the process runs with a production environment
    pub fn is_production() -> bool {
        env::var("RUST_ENV").map(|e| e == "production").unwrap_or(false)
    }
}
