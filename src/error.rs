use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out after {0}s")]
    TimeoutError(u64),

    #[error("HTTP error {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("No patch available")]
    NoPatchAvailable,

    #[error("No patch has statistics data available")]
    NoDataForAnyPatch,

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("No matchup data for {champion_a} vs {champion_b} ({role}) on patch {patch}")]
    MatchupNotFound {
        champion_a: String,
        champion_b: String,
        role: String,
        patch: String,
    },

    #[error("Failed to fetch {what}: {reason}")]
    FetchError { what: &'static str, reason: String },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StatsError {
    pub fn fetch(what: &'static str, cause: StatsError) -> Self {
        StatsError::FetchError {
            what,
            reason: cause.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StatsError::HttpError { status: 404, .. })
    }

    /// Message shown to the user when a view has to be reset to empty.
    pub fn user_message(&self) -> String {
        match self {
            StatsError::NetworkError(_) | StatsError::TimeoutError(_) => {
                "The statistics server could not be reached. Please try again.".to_string()
            }
            StatsError::HttpError { .. } | StatsError::JsonError(_) => {
                "The statistics server returned an unexpected response.".to_string()
            }
            StatsError::NoPatchAvailable | StatsError::NoDataForAnyPatch => {
                "No statistics are available for any patch yet.".to_string()
            }
            StatsError::MatchupNotFound { .. } => {
                "No matchup data found for these champions in this role.".to_string()
            }
            StatsError::FetchError { what, .. } => format!("Could not load {}.", what),
            StatsError::ChampionNotFound(_)
            | StatsError::UnknownRole(_)
            | StatsError::InvalidInput(_)
            | StatsError::ConfigError(_) => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = StatsError::HttpError {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 502: bad gateway");
    }

    #[test]
    fn test_is_not_found_only_for_404() {
        let not_found = StatsError::HttpError {
            status: 404,
            body: String::new(),
        };
        let server = StatsError::HttpError {
            status: 500,
            body: String::new(),
        };
        assert!(not_found.is_not_found());
        assert!(!server.is_not_found());
        assert!(!StatsError::TimeoutError(10).is_not_found());
    }

    #[test]
    fn test_fetch_wraps_cause() {
        let err = StatsError::fetch("champion statistics", StatsError::TimeoutError(10));
        let msg = err.to_string();
        assert!(msg.contains("champion statistics"));
        assert!(msg.contains("timed out after 10s"));
        assert_eq!(err.user_message(), "Could not load champion statistics.");
    }

    #[test]
    fn test_user_message_hides_transport_details() {
        let err = StatsError::NetworkError("connection refused (os error 111)".to_string());
        assert!(!err.user_message().contains("os error"));
    }
}
