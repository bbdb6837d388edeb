//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! completed fetches, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, `WebRequestResult`)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods and the fetch controllers
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `Submit`
//! - **Mode Switching**: `Escape`, `EditSearch`
//! - **Navigation**: `NewsDown`, `NewsUp`, `OpenSelected`, `CloseFocus`
//! - **System**: `FetchCompleted`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use pollution_tracker::app::{handle_event, Action, AppState, Event};
//! use pollution_tracker::fetch::ApiClient;
//! use pollution_tracker::ui::Theme;
//!
//! let mut state = AppState::new(ApiClient::default(), Theme::default());
//! for c in "Delhi".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), pollution_tracker::PollutionTrackerError>(())
//! ```

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::fetch::FetchResponse;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character from the search input.
    Backspace,
    /// Submits the search input and switches to browsing.
    Submit,
    /// Leaves the search bar without submitting.
    Escape,
    /// Focuses the search bar.
    EditSearch,

    /// Selects the next news article (wraps to top).
    NewsDown,
    /// Selects the previous news article (wraps to bottom).
    NewsUp,
    /// Opens the selected news article.
    OpenSelected,
    /// Hides the plugin pane.
    CloseFocus,

    /// A `web_request` issued earlier has completed.
    FetchCompleted(FetchResponse),

    /// Reports the outcome of the permission request.
    PermissionsResult {
        /// Permissions granted by the user; empty if denied.
        granted: Vec<PermissionType>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, plus the actions to run in order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for state transitions that can fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.input.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing || state.input.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            let requests = state.submit_search();
            state.input_mode = InputMode::Browsing;

            tracing::debug!(
                search_state = state.search.state().name(),
                request_count = requests.len(),
                "search submitted"
            );

            Ok((true, requests.into_iter().map(Action::Fetch).collect()))
        }
        Event::Escape | Event::EditSearch => {
            let next = if matches!(event, Event::Escape) {
                InputMode::Browsing
            } else {
                InputMode::Editing
            };
            if state.input_mode == next {
                return Ok((false, vec![]));
            }
            tracing::debug!(from = ?state.input_mode, to = ?next, "switching input mode");
            state.input_mode = next;
            Ok((true, vec![]))
        }
        Event::NewsDown => {
            state.move_news_down();
            Ok((true, vec![]))
        }
        Event::NewsUp => {
            state.move_news_up();
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(item) = state.selected_news_item() else {
                tracing::debug!("no news article selected");
                return Ok((false, vec![]));
            };

            if item.url.trim().is_empty() {
                tracing::debug!(title = %item.title, "selected article has no link");
                return Ok((false, vec![]));
            }

            tracing::debug!(title = %item.title, url = %item.url, "opening article");
            Ok((false, vec![Action::OpenLink { url: item.url.clone() }]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FetchCompleted(response) => {
            let _otel_guard = response
                .trace_context
                .as_ref()
                .and_then(crate::fetch::TraceContext::attach);
            let _fetch_span = tracing::debug_span!(
                "fetch_completed",
                kind = %response.kind,
                request_id = response.request_id,
                status = response.status
            )
            .entered();

            let (changed, follow_up) = state.apply_response(response);
            Ok((changed, follow_up.into_iter().map(Action::Fetch).collect()))
        }
        Event::PermissionsResult { granted } => {
            let web_access = granted.contains(&PermissionType::WebAccess);
            if web_access {
                tracing::debug!(granted = ?granted, "permissions granted");
            } else {
                tracing::warn!(granted = ?granted, "web access not granted - searches will fail");
            }
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{ApiClient, FetchKind, FetchRequest};
    use crate::ui::viewmodel::Body;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(ApiClient::default(), Theme::default())
    }

    fn type_query(state: &mut AppState, query: &str) {
        state.input.clear();
        state.input_mode = InputMode::Editing;
        for c in query.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn submit(state: &mut AppState, query: &str) -> Vec<FetchRequest> {
        type_query(state, query);
        let (_, actions) = handle_event(state, &Event::Submit).unwrap();
        fetches(actions)
    }

    fn fetches(actions: Vec<Action>) -> Vec<FetchRequest> {
        actions
            .into_iter()
            .map(|action| match action {
                Action::Fetch(request) => request,
                other => panic!("expected fetch, got {other:?}"),
            })
            .collect()
    }

    fn complete(state: &mut AppState, request: &FetchRequest, status: u16, body: &str) -> Vec<FetchRequest> {
        let response = FetchResponse {
            kind: request.kind,
            request_id: request.request_id,
            status,
            body: body.as_bytes().to_vec(),
            trace_context: None,
        };
        let (_, actions) = handle_event(state, &Event::FetchCompleted(response)).unwrap();
        fetches(actions)
    }

    #[test]
    fn typing_edits_input_only_in_editing_mode() {
        let mut state = state();
        type_query(&mut state, "Delhx");
        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Char('i')).unwrap();
        assert_eq!(state.input, "Delhi");

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Browsing);
        let (render, _) = handle_event(&mut state, &Event::Char('j')).unwrap();
        assert!(!render);
        assert_eq!(state.input, "Delhi");

        handle_event(&mut state, &Event::EditSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Editing);
    }

    #[test]
    fn delhi_search_then_tips() {
        let mut state = state();
        let requests = submit(&mut state, "Delhi");
        assert_eq!(requests.len(), 1);
        assert_eq!(state.input_mode, InputMode::Browsing);
        assert!(matches!(state.compute_viewmodel(24, 80).body, Body::Loading(_)));

        let follow_up = complete(
            &mut state,
            &requests[0],
            200,
            r#"{"location":"Delhi","aqi_level":"Unhealthy","aqi_data":{"aqi":180,"pm25":120.4}}"#,
        );
        assert_eq!(follow_up.len(), 1);
        assert_eq!(follow_up[0].kind, FetchKind::HealthTips);
        assert!(follow_up[0].url.ends_with("/api/health-tips?aqi_level=Unhealthy"));

        complete(&mut state, &follow_up[0], 200, r#"{"health_tips":["Limit outdoor activity"]}"#);
        assert_eq!(state.health_tips.tips(), ["Limit outdoor activity".to_string()]);
    }

    #[test]
    fn not_found_shows_backend_message() {
        let mut state = state();
        let requests = submit(&mut state, "Atlantis");
        complete(&mut state, &requests[0], 404, r#"{"error":"Location not found"}"#);

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Error(ref e) if e.message == "Location not found"));
    }

    #[test]
    fn tips_failure_is_silent() {
        let mut state = state();
        let requests = submit(&mut state, "Reykjavik");
        let follow_up = complete(
            &mut state,
            &requests[0],
            200,
            r#"{"location":"Reykjavik","aqi_level":"Good","aqi_data":{"aqi":20}}"#,
        );
        complete(&mut state, &follow_up[0], 503, "");

        let vm = state.compute_viewmodel(24, 80);
        let Body::Results(results) = vm.body else {
            panic!("expected results");
        };
        assert!(results.health_tips.unwrap().tips.is_empty());
    }

    #[test]
    fn empty_query_errors_without_fetch() {
        let mut state = state();
        let requests = submit(&mut state, "   ");
        assert!(requests.is_empty());

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Error(ref e) if e.message == "Please enter a location"));
    }

    #[test]
    fn new_search_refetches_tips_for_same_level() {
        let mut state = state();
        let body = r#"{"location":"Delhi","aqi_level":"Unhealthy"}"#;
        let first = submit(&mut state, "Delhi");
        let tips = complete(&mut state, &first[0], 200, body);
        assert_eq!(tips.len(), 1);

        // Loading clears the result and with it the level.
        let second = submit(&mut state, "New Delhi");
        let tips = complete(&mut state, &second[0], 200, body);
        assert_eq!(tips.len(), 1);
    }

    #[test]
    fn out_of_order_responses_keep_latest_query() {
        let mut state = state();
        let slow = submit(&mut state, "Delhi");
        let fast = submit(&mut state, "Paris");

        complete(&mut state, &fast[0], 200, r#"{"location":"Paris"}"#);
        let follow_up = complete(&mut state, &slow[0], 200, r#"{"location":"Delhi","aqi_level":"Hazardous"}"#);
        assert!(follow_up.is_empty());

        let vm = state.compute_viewmodel(24, 80);
        let Body::Results(results) = vm.body else {
            panic!("expected results");
        };
        assert_eq!(results.location.name, "Paris");
    }

    #[test]
    fn open_selected_emits_link() {
        let mut state = state();
        let requests = submit(&mut state, "Paris");
        complete(
            &mut state,
            &requests[0],
            200,
            r#"{"location":"Paris","pollution_news":[
                {"title":"A","url":"https://example.org/a"},
                {"title":"B","url":"https://example.org/b"}]}"#,
        );

        handle_event(&mut state, &Event::NewsDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenLink {
                url: "https://example.org/b".to_string()
            }]
        );
    }

    #[test]
    fn open_without_news_is_noop() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn close_focus() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
