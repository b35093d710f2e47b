//! Configuration management for the dashboard feed

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Fallback bar color applied when a team record carries no color token.
pub const DEFAULT_TEAM_COLOR: &str = "#89CFF0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the scoring backend
    pub api_url: String,

    /// Path of the team-scores endpoint, relative to the base URL
    pub scores_path: String,

    /// Fixed cadence between poll cycles
    pub poll_interval: Duration,

    /// HTTP timeout for backend requests
    pub http_timeout: Duration,

    /// Color token applied to teams without one
    pub default_team_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Local-development fallback; deployments set API_URL
            api_url: "http://localhost:8080".to_string(),
            scores_path: "/teams/scores".to_string(),
            poll_interval: Duration::from_millis(5000),
            http_timeout: Duration::from_secs(10),
            default_team_color: DEFAULT_TEAM_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(api_url) = env::var("API_URL") {
            config.api_url = api_url;
        }

        if let Ok(scores_path) = env::var("SCORES_PATH") {
            config.scores_path = scores_path;
        }

        if let Ok(interval) = env::var("POLL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse::<u64>() {
                config.poll_interval = Duration::from_millis(ms);
            }
        }

        if let Ok(timeout) = env::var("HTTP_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.http_timeout = Duration::from_secs(seconds);
            }
        }

        if let Ok(color) = env::var("DEFAULT_TEAM_COLOR") {
            config.default_team_color = color;
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url cannot be empty".to_string());
        }

        if self.scores_path.is_empty() {
            return Err("scores_path cannot be empty".to_string());
        }

        if self.poll_interval.is_zero() {
            return Err("poll_interval must be greater than 0".to_string());
        }

        if self.http_timeout.is_zero() {
            return Err("http_timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
