use crate::error::StatsError;
use std::env;
use std::time::Duration;

/// Fixed per-request timeout of the statistics API.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the statistics server. Empty means relative paths.
    pub base_url: String,
    pub log_level: String,
}

impl Config {
    /// Loads `.env` and the process environment. `api_url` replaces
    /// `STATS_API_URL` when given; only the URL in use is validated.
    pub fn from_env(api_url: Option<&str>) -> Result<Self, StatsError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("STATS_LOG").unwrap_or_else(|_| "info".to_string());
        Config::resolve(api_url, env::var("STATS_API_URL").ok(), &log_level)
    }

    fn resolve(
        api_url: Option<&str>,
        env_url: Option<String>,
        log_level: &str,
    ) -> Result<Self, StatsError> {
        match api_url {
            Some(url) => Config::new(url, log_level),
            None => Config::new(env_url.as_deref().unwrap_or_default(), log_level),
        }
    }

    pub fn new(base_url: &str, log_level: &str) -> Result<Self, StatsError> {
        Ok(Config {
            base_url: normalize_base_url(base_url)?,
            log_level: log_level.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, StatsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(StatsError::ConfigError(format!(
            "API base URL must start with http:// or https:// (got \"{}\")",
            raw
        )));
    }

    Ok(trimmed.to_string())
}
