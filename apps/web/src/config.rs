use std::time::Duration;

use anyhow::{Context, Result};

use crate::controller::{DEFAULT_QUERY, DEFAULT_TIMEOUT};
use crate::recommender_client::DEFAULT_ENDPOINT;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub recommender_api_url: String,
    pub request_timeout_ms: u64,
    pub default_query: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            recommender_api_url: lookup("RECOMMENDER_API_URL")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("REQUEST_TIMEOUT_MS must be a whole number of milliseconds")?
                .unwrap_or(DEFAULT_TIMEOUT.as_millis() as u64),
            default_query: lookup("DEFAULT_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.recommender_api_url, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_millis(20_000));
        assert_eq!(config.default_query, DEFAULT_QUERY);
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("RECOMMENDER_API_URL", "http://localhost:8000/recommend"),
            ("REQUEST_TIMEOUT_MS", "5000"),
            ("PORT", "8081"),
        ])
        .unwrap();
        assert_eq!(config.recommender_api_url, "http://localhost:8000/recommend");
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = config_from(&[("REQUEST_TIMEOUT_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_MS"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(config_from(&[("PORT", "99999")]).is_err());
    }
}
