//! Health tips fetch, derived from the search result's AQI level.
//!
//! The dependency is explicit: after every change of the primary search state the
//! handler calls [`HealthTipsController::observe`] with the current AQI level. When
//! that level differs from the one last used, the tips are reset and, if a level is
//! present, refetched. Failures are logged and degrade to an empty tip list; they are
//! never shown to the user.

use crate::app::modes::RequestState;
use crate::domain::{AqiLevel, HealthTips};
use crate::fetch::{parse_health_tips, ApiClient, FetchRequest, FetchResponse};

#[derive(Debug, Clone)]
pub struct HealthTipsController {
    api: ApiClient,
    state: RequestState<HealthTips>,
    /// Level the current state belongs to.
    observed_level: Option<AqiLevel>,
    latest_request_id: u64,
}

impl HealthTipsController {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RequestState::Idle,
            observed_level: None,
            latest_request_id: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState<HealthTips> {
        &self.state
    }

    /// Tips to display. Empty unless the latest fetch succeeded for the level
    /// currently observed.
    #[must_use]
    pub fn tips(&self) -> &[String] {
        self.state
            .success()
            .filter(|tips| self.observed_level.as_ref() == Some(&tips.level))
            .map_or(&[], |tips| tips.tips.as_slice())
    }

    /// Re-evaluates the dependency on the search result's AQI level.
    ///
    /// Returns the request to issue when the level changed to a present value.
    pub fn observe(&mut self, level: Option<&AqiLevel>) -> Option<FetchRequest> {
        if self.observed_level.as_ref() == level {
            return None;
        }

        tracing::debug!(
            previous = ?self.observed_level,
            current = ?level,
            "aqi level changed"
        );
        self.observed_level = level.cloned();
        self.latest_request_id += 1;

        let Some(level) = level else {
            self.state = RequestState::Idle;
            return None;
        };

        self.state = RequestState::Loading;
        Some(self.api.health_tips_request(self.latest_request_id, level))
    }

    /// Applies a health-tips response. Returns `true` if the state changed.
    pub fn resolve(&mut self, response: &FetchResponse) -> bool {
        if response.request_id != self.latest_request_id || !self.state.is_loading() {
            tracing::debug!(
                request_id = response.request_id,
                latest_request_id = self.latest_request_id,
                "discarding stale health tips response"
            );
            return false;
        }

        let Some(level) = self.observed_level.clone() else {
            return false;
        };

        self.state = match parse_health_tips(response.status, &response.body) {
            Ok(tips) => {
                tracing::debug!(aqi_level = %level, tip_count = tips.len(), "health tips loaded");
                RequestState::Success(HealthTips::new(level, tips))
            }
            Err(e) => {
                tracing::warn!(aqi_level = %level, error = %e, "error fetching health tips");
                RequestState::Error(e.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchKind;

    fn controller() -> HealthTipsController {
        HealthTipsController::new(ApiClient::default())
    }

    fn response(request: &FetchRequest, status: u16, body: &str) -> FetchResponse {
        FetchResponse {
            kind: request.kind,
            request_id: request.request_id,
            status,
            body: body.as_bytes().to_vec(),
            trace_context: None,
        }
    }

    #[test]
    fn absent_level_never_fetches() {
        let mut tips = controller();
        assert!(tips.observe(None).is_none());
        assert!(tips.tips().is_empty());
        assert_eq!(tips.state(), &RequestState::Idle);
    }

    #[test]
    fn fetches_once_per_level_change() {
        let mut tips = controller();
        let request = tips.observe(Some(&AqiLevel::Good)).unwrap();

        assert_eq!(request.kind, FetchKind::HealthTips);
        assert_eq!(
            request.url,
            "http://localhost:5001/api/health-tips?aqi_level=Good"
        );
        assert!(tips.observe(Some(&AqiLevel::Good)).is_none());
        assert!(tips.observe(Some(&AqiLevel::Hazardous)).is_some());
    }

    #[test]
    fn success_replaces_tips_wholesale() {
        let mut tips = controller();
        let first = tips.observe(Some(&AqiLevel::Good)).unwrap();
        tips.resolve(&response(&first, 200, r#"{"health_tips":["a","b","c"]}"#));
        assert_eq!(tips.tips().len(), 3);

        let second = tips.observe(Some(&AqiLevel::Unhealthy)).unwrap();
        assert!(tips.tips().is_empty());
        tips.resolve(&response(&second, 200, r#"{"health_tips":["wear a mask"]}"#));
        assert_eq!(tips.tips(), ["wear a mask".to_string()]);
        assert_eq!(
            tips.state().success().map(|t| &t.level),
            Some(&AqiLevel::Unhealthy)
        );
    }

    #[test]
    fn failure_degrades_to_empty_list() {
        let mut tips = controller();
        let request = tips.observe(Some(&AqiLevel::Good)).unwrap();

        assert!(tips.resolve(&response(&request, 500, "boom")));
        assert!(tips.tips().is_empty());
        assert!(tips.state().error().is_some());
    }

    #[test]
    fn level_cleared_resets_and_refetches_on_return() {
        let mut tips = controller();
        let request = tips.observe(Some(&AqiLevel::Good)).unwrap();
        tips.resolve(&response(&request, 200, r#"{"health_tips":["ok"]}"#));

        assert!(tips.observe(None).is_none());
        assert!(tips.tips().is_empty());
        assert!(tips.observe(Some(&AqiLevel::Good)).is_some());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut tips = controller();
        let old = tips.observe(Some(&AqiLevel::Good)).unwrap();
        let new = tips.observe(Some(&AqiLevel::Moderate)).unwrap();

        assert!(!tips.resolve(&response(&old, 200, r#"{"health_tips":["old"]}"#)));
        assert!(tips.resolve(&response(&new, 200, r#"{"health_tips":["new"]}"#)));
        assert_eq!(tips.tips(), ["new".to_string()]);
    }
}
