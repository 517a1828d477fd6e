//! Synchronous client for the upstream **REST Countries API (v3.1)**.
//!
//! This module performs exactly one call: `GET {base_url}/all` for the full
//! country dataset, restricted to the fields this crate consumes. The payload
//! is validated as a whole; a malformed record fails the entire batch.
//!
//! ### Notes
//! - The request timeout comes from configuration (default 60s total,
//!   10s connect). There are **no retries** here: retry policy, if any,
//!   belongs to the caller.
//! - Transport failures and timeouts surface as [`Error::UpstreamUnavailable`];
//!   shape violations surface as [`Error::InvalidDataFormat`].
//!
//! Typical usage:
//! ```no_run
//! # use country_facts::Client;
//! let client = Client::default();
//! let countries = client.fetch_all()?;
//! # Ok::<(), country_facts::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::{Country, RawCountry};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Base URL of the public REST Countries deployment.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Total request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

// Only the fields the data model consumes; the API trims its payload to these.
const FIELDS: &str = "name,region,population,area,languages,borders,latlng";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

impl Client {
    /// Build a client against `base_url` with a total request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country_facts/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Fetch the full country dataset in one call.
    ///
    /// ### Errors
    /// - [`Error::UpstreamUnavailable`]: network error, timeout, or non-2xx
    ///   HTTP status.
    /// - [`Error::InvalidDataFormat`]: the body is not a JSON array, or any
    ///   record lacks a string `name.common`, string `region`, or numeric
    ///   `population`.
    pub fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = format!("{}/all?fields={}", self.base_url, FIELDS);
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| Error::UpstreamUnavailable(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamUnavailable(format!(
                "GET {} failed with HTTP {}",
                url,
                resp.status()
            )));
        }
        let body: Value = resp
            .json()
            .map_err(|e| Error::InvalidDataFormat(format!("decode json: {}", e)))?;
        let countries = parse_payload(body)?;
        log::debug!("fetched {} countries from {}", countries.len(), url);
        Ok(countries)
    }
}

/// Validate the upstream payload shape and convert it to tidy [`Country`] rows.
///
/// The whole batch fails on the first invalid record; the cache must never
/// hold a dataset known to be partially invalid.
pub fn parse_payload(body: Value) -> Result<Vec<Country>> {
    if !body.is_array() {
        return Err(Error::InvalidDataFormat(
            "expected a top-level array of country records".into(),
        ));
    }
    let raw: Vec<RawCountry> =
        serde_json::from_value(body).map_err(|e| Error::InvalidDataFormat(e.to_string()))?;
    Ok(raw.into_iter().map(Country::from).collect())
}
