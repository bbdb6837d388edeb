//! Primary search lifecycle.
//!
//! [`SearchController`] is the sole owner and writer of the pollution-data
//! [`RequestState`]. Submitting a query moves it to `Loading` and yields a
//! [`FetchRequest`]; the host's response later moves it to `Success` or `Error`.
//!
//! # Stale Responses
//!
//! Requests are never cancelled, so a slow response to an earlier query may arrive
//! after a later one. Each submission takes a fresh, monotonically increasing request
//! id and only a response carrying the latest id is applied; anything else is dropped.
//! The displayed result therefore always belongs to the most recently submitted query.

use crate::app::modes::RequestState;
use crate::domain::{AqiLevel, PollutionResult, SearchQuery};
use crate::fetch::{parse_pollution_data, ApiClient, FetchRequest, FetchResponse};

/// Owns the request lifecycle of the primary location search.
#[derive(Debug, Clone)]
pub struct SearchController {
    api: ApiClient,
    state: RequestState<PollutionResult>,
    latest_request_id: u64,
}

impl SearchController {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RequestState::Idle,
            latest_request_id: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &RequestState<PollutionResult> {
        &self.state
    }

    /// The current result, if the latest search succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&PollutionResult> {
        self.state.success()
    }

    /// AQI level of the current result, which drives the health tips fetch.
    #[must_use]
    pub fn aqi_level(&self) -> Option<&AqiLevel> {
        self.result().and_then(|result| result.aqi_level.as_ref())
    }

    /// Submits a search for `raw_query`.
    ///
    /// Blank input moves straight to `Error("Please enter a location")` without a
    /// request; it also supersedes any search still in flight. Otherwise the state
    /// becomes `Loading` and the request to issue is returned.
    pub fn submit(&mut self, raw_query: &str) -> Option<FetchRequest> {
        self.latest_request_id += 1;

        match SearchQuery::parse(raw_query) {
            Ok(query) => {
                tracing::debug!(
                    request_id = self.latest_request_id,
                    location = %query.as_str(),
                    "submitting search"
                );
                self.state = RequestState::Loading;
                Some(self.api.pollution_data_request(self.latest_request_id, &query))
            }
            Err(e) => {
                tracing::debug!("rejecting empty search query");
                self.state = RequestState::Error(e.user_message());
                None
            }
        }
    }

    /// Applies a pollution-data response.
    ///
    /// Returns `true` if the state changed. Responses to superseded requests are
    /// discarded and return `false`.
    pub fn resolve(&mut self, response: &FetchResponse) -> bool {
        if response.request_id != self.latest_request_id || !self.state.is_loading() {
            tracing::debug!(
                request_id = response.request_id,
                latest_request_id = self.latest_request_id,
                "discarding stale search response"
            );
            return false;
        }

        self.state = match parse_pollution_data(response.status, &response.body) {
            Ok(result) => {
                tracing::debug!(
                    location = %result.location,
                    aqi_level = ?result.aqi_level,
                    source_count = result.pollution_sources.len(),
                    news_count = result.pollution_news.len(),
                    "search succeeded"
                );
                RequestState::Success(result)
            }
            Err(e) => {
                tracing::debug!(status = response.status, error = %e, "search failed");
                RequestState::Error(e.user_message())
            }
        };
        true
    }
}
