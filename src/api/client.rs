use crate::config::Config;
use crate::error::StatsError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io;
use std::time::Duration;
use tracing::debug;

use super::endpoints::API_PREFIX;

/// GET executor against the statistics server.
///
/// Implementations do no retrying and no caching; each call is exactly one
/// request. Services hold it as `Arc<dyn StatsApi>`.
pub trait StatsApi: Send + Sync {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, StatsError>;
}

/// Runs a GET and deserializes the body into `T`.
pub fn get_json<T: DeserializeOwned>(
    api: &dyn StatsApi,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, StatsError> {
    let body = api.get(path, query)?;
    serde_json::from_value(body).map_err(|e| StatsError::JsonError(e.to_string()))
}

pub struct HttpStatsClient {
    agent: ureq::Agent,
    base_url: String,
    timeout_secs: u64,
}

impl HttpStatsClient {
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config, config.timeout())
    }

    /// Same as [`HttpStatsClient::new`] with a whole-request deadline other than the default.
    pub fn with_timeout(config: &Config, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent("lol_stats/0.1.0")
            .build();

        HttpStatsClient {
            agent,
            base_url: config.base_url.clone(),
            timeout_secs: timeout.as_secs(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }
}

impl StatsApi for HttpStatsClient {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, StatsError> {
        let url = self.url(path);
        debug!(url = %url, ?query, "GET");

        let mut request = self.agent.get(&url).set("Accept", "application/json");
        for (key, value) in query {
            request = request.query(key, value);
        }

        match request.call() {
            Ok(resp) => resp
                .into_json::<Value>()
                .map_err(|e| classify_io(&e, self.timeout_secs)),
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                debug!(status, url = %url, "non-success status");
                Err(StatsError::HttpError { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(classify_transport(&transport, self.timeout_secs))
            }
        }
    }
}

fn classify_io(err: &io::Error, timeout_secs: u64) -> StatsError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => StatsError::TimeoutError(timeout_secs),
        io::ErrorKind::InvalidData => StatsError::JsonError(err.to_string()),
        _ => StatsError::NetworkError(err.to_string()),
    }
}

fn classify_transport(transport: &ureq::Transport, timeout_secs: u64) -> StatsError {
    let io_err = std::error::Error::source(transport).and_then(|s| s.downcast_ref::<io::Error>());

    match io_err {
        Some(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
            StatsError::TimeoutError(timeout_secs)
        }
        _ if transport.to_string().contains("timed out") => StatsError::TimeoutError(timeout_secs),
        _ => StatsError::NetworkError(transport.to_string()),
    }
}
