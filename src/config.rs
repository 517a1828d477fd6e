//! Environment-driven configuration.
//!
//! Every knob has a default matching the public REST Countries deployment;
//! malformed values are reported as errors rather than silently defaulted.

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::cache::DEFAULT_TTL_SECS;
use anyhow::{Context, Result, ensure};
use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the upstream source.
    pub base_url: String,
    /// Total timeout for the upstream call.
    pub timeout: Duration,
    /// Snapshot time-to-live in seconds.
    pub ttl_secs: i64,
    /// Cache capacity bound. The whole dataset is one cache key, so anything
    /// above 1 is accepted but has nothing further to hold.
    pub max_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            ttl_secs: DEFAULT_TTL_SECS,
            max_entries: 1,
        }
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {}: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Recognized variables: `COUNTRY_API_BASE_URL`, `COUNTRY_API_TIMEOUT_MS`,
    /// `COUNTRY_CACHE_TTL_SECS`, `COUNTRY_CACHE_MAX_ENTRIES`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let base_url = env::var("COUNTRY_API_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_ms: u64 = parsed_var(
            "COUNTRY_API_TIMEOUT_MS",
            defaults.timeout.as_millis() as u64,
        )?;
        let ttl_secs: i64 = parsed_var("COUNTRY_CACHE_TTL_SECS", defaults.ttl_secs)?;
        ensure!(ttl_secs >= 0, "COUNTRY_CACHE_TTL_SECS must be non-negative");
        let max_entries: usize = parsed_var("COUNTRY_CACHE_MAX_ENTRIES", defaults.max_entries)?;
        ensure!(max_entries >= 1, "COUNTRY_CACHE_MAX_ENTRIES must be >= 1");
        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            ttl_secs,
            max_entries,
        })
    }
}
