//! Backend endpoint builder and response decoding.
//!
//! [`ApiClient`] holds the base URL resolved once at startup and builds the two
//! request URLs the plugin needs. It performs no I/O: requests are executed by the
//! Zellij host and their results are decoded here.

use crate::domain::error::{PollutionTrackerError, Result};
use crate::domain::{AqiLevel, PollutionResult, SearchQuery};
use crate::fetch::messages::{FetchKind, FetchRequest};
use serde::Deserialize;
use url::Url;

/// Base URL used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Success body of `GET /api/health-tips`.
#[derive(Debug, Deserialize)]
struct HealthTipsBody {
    #[serde(default)]
    health_tips: Option<Vec<String>>,
}

/// Builds backend request URLs from an immutable base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// A path on the base URL is kept as a prefix, so `http://host/tracker` yields
    /// `http://host/tracker/api/pollution-data`.
    ///
    /// # Errors
    ///
    /// Returns [`PollutionTrackerError::Config`] if `base_url` is not an absolute
    /// `http`/`https` URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use pollution_tracker::fetch::ApiClient;
    ///
    /// let client = ApiClient::new("http://localhost:5001").unwrap();
    /// assert_eq!(
    ///     client.health_tips_url("Good"),
    ///     "http://localhost:5001/api/health-tips?aqi_level=Good"
    /// );
    /// assert!(ApiClient::new("not a url").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| PollutionTrackerError::Config(format!("invalid api_base_url '{base_url}': {e}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(PollutionTrackerError::Config(format!(
                "api_base_url must be an http(s) URL, got '{base_url}'"
            )));
        }

        Ok(Self { base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &[&str], key: &str, value: &str) -> String {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        url.query_pairs_mut().append_pair(key, value);
        url.into()
    }

    /// URL of `GET /api/pollution-data?location=<query>`.
    #[must_use]
    pub fn pollution_data_url(&self, location: &str) -> String {
        self.endpoint(&["api", "pollution-data"], "location", location)
    }

    /// URL of `GET /api/health-tips?aqi_level=<level>`.
    #[must_use]
    pub fn health_tips_url(&self, level: &str) -> String {
        self.endpoint(&["api", "health-tips"], "aqi_level", level)
    }

    /// Builds the primary search request.
    #[must_use]
    pub fn pollution_data_request(&self, request_id: u64, query: &SearchQuery) -> FetchRequest {
        FetchRequest::new(
            FetchKind::PollutionData,
            request_id,
            self.pollution_data_url(query.as_str()),
        )
    }

    /// Builds the health tips request for `level`.
    #[must_use]
    pub fn health_tips_request(&self, request_id: u64, level: &AqiLevel) -> FetchRequest {
        FetchRequest::new(
            FetchKind::HealthTips,
            request_id,
            self.health_tips_url(level.as_str()),
        )
    }
}

impl Default for ApiClient {
    /// Returns a client for [`DEFAULT_API_BASE_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in default URL fails to parse (should never occur).
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL).expect("built-in default API base URL should always parse")
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decodes a pollution-data response.
///
/// # Errors
///
/// - [`PollutionTrackerError::Api`] for non-2xx statuses, carrying the body's
///   `error` field when it is a JSON object with one
/// - [`PollutionTrackerError::Decode`] when a 2xx body is not a valid result
pub fn parse_pollution_data(status: u16, body: &[u8]) -> Result<PollutionResult> {
    if !is_success(status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty());
        return Err(PollutionTrackerError::Api { status, message });
    }

    Ok(serde_json::from_slice(body)?)
}

/// Decodes a health-tips response. A `null` or missing tip list decodes as empty.
///
/// # Errors
///
/// - [`PollutionTrackerError::Api`] for non-2xx statuses
/// - [`PollutionTrackerError::Decode`] when the body is not valid JSON
pub fn parse_health_tips(status: u16, body: &[u8]) -> Result<Vec<String>> {
    if !is_success(status) {
        return Err(PollutionTrackerError::Api {
            status,
            message: None,
        });
    }

    let body: HealthTipsBody = serde_json::from_slice(body)?;
    Ok(body.health_tips.unwrap_or_default())
}
