use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use remotive_client::DEFAULT_API_URL;

use crate::cache::RetryPolicy;

/// Board configuration.
///
/// Defaults match the public board: 10 jobs per page, 5 page links, responses
/// fresh for 5 minutes and kept for 10, failed loads retried 3 times with
/// backoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub api_url: String,
    pub page_size: u32,
    pub window_size: u32,
    pub stale_time: Duration,
    pub gc_time: Duration,
    pub retry: RetryPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: 10,
            window_size: 5,
            stale_time: Duration::from_secs(5 * 60),
            gc_time: Duration::from_secs(10 * 60),
            retry: RetryPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();
        let config = Self {
            api_url: env::var("REMOTIVE_API_URL").unwrap_or(defaults.api_url),
            page_size: parse_var("JOBS_PAGE_SIZE")?.unwrap_or(defaults.page_size),
            window_size: parse_var("JOBS_WINDOW_SIZE")?.unwrap_or(defaults.window_size),
            stale_time: parse_var("JOBS_STALE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.stale_time),
            gc_time: parse_var("JOBS_GC_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.gc_time),
            retry: RetryPolicy {
                retries: parse_var("JOBS_RETRIES")?.unwrap_or(defaults.retry.retries),
                base_delay: parse_var("JOBS_RETRY_DELAY_MS")?
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.retry.base_delay),
                max_delay: parse_var("JOBS_RETRY_MAX_DELAY_MS")?
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.retry.max_delay),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.page_size > 0, "JOBS_PAGE_SIZE must be at least 1");
        ensure!(self.window_size > 0, "JOBS_WINDOW_SIZE must be at least 1");
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a valid number")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.api_url, "https://remotive.com/api/remote-jobs");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.window_size, 5);
        assert_eq!(config.stale_time, Duration::from_secs(300));
        assert_eq!(config.gc_time, Duration::from_secs(600));
        assert_eq!(config.retry.retries, 3);
        assert_eq!(config.retry.max_delay, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = BoardConfig {
            page_size: 0,
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_var_reports_name() {
        std::env::set_var("JOBS_TEST_BAD_NUMBER", "ten");
        let err = parse_var::<u32>("JOBS_TEST_BAD_NUMBER").unwrap_err();
        assert!(err.to_string().contains("JOBS_TEST_BAD_NUMBER"));

        std::env::set_var("JOBS_TEST_GOOD_NUMBER", " 25 ");
        assert_eq!(parse_var::<u32>("JOBS_TEST_GOOD_NUMBER").unwrap(), Some(25));
        assert_eq!(parse_var::<u32>("JOBS_TEST_UNSET_NUMBER").unwrap(), None);
    }
}
