//! Build-time Configuration
//!
//! Values are baked in at compile time (`GLAS_API_URL=... trunk build`).

use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, including the `/api/v1` prefix
    pub api_base_url: String,
    pub log_level: Level,
    /// Records kept in the in-memory log buffer
    pub log_capacity: usize,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GLAS_API_URL"),
            option_env!("GLAS_LOG_LEVEL"),
            option_env!("GLAS_LOG_CAPACITY"),
        )
    }

    /// Malformed or blank values fall back to defaults
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>, log_capacity: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(rolling_logger::parse_level)
            .unwrap_or(Level::INFO);
        let log_capacity = log_capacity
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_LOG_CAPACITY);

        Self {
            api_base_url,
            log_level,
            log_capacity,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
