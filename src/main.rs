//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Pollution Tracker library and the Zellij
//! plugin system. Everything that touches the host lives here: permissions,
//! subscriptions, key mapping and the execution of library [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Update**: Map host events to library events and run the returned actions
//! 4. **Render**: Call the library render function
//!
//! # Fetching
//!
//! `Action::Fetch` becomes a host `web_request`. The request kind, id and trace
//! context travel in the request's context map and come back with the
//! `WebRequestResult`, where they are decoded into an `Event::FetchCompleted`.
//!
//! # Keybindings
//!
//! While editing the search:
//! - Any character: Type
//! - `Backspace`: Delete
//! - `Enter`: Search
//! - `Esc`: Browse results
//!
//! While browsing:
//! - `j`/`Down`: Next article
//! - `k`/`Up`: Previous article
//! - `Enter`/`o`: Open article
//! - `/`: Edit search
//! - `q`/`Esc`: Close plugin

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use pollution_tracker::fetch::FetchResponse;
#[cfg(target_family = "wasm")]
use pollution_tracker::{handle_event, Action, AppState, Config, Event, InputMode};

// Register plugin with Zellij
#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the host-side settings needed to run
/// actions.
#[cfg(target_family = "wasm")]
struct State {
    /// Core application state from library layer.
    app: AppState,

    /// Program used to open news links.
    open_command: String,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: pollution_tracker::initialize(&config),
            open_command: config.open_command,
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Parses configuration, initializes state, requests permissions and
    /// subscribes to events.
    ///
    /// Requests `WebAccess` for backend fetches and `RunCommands` for opening
    /// news links.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pollution_tracker::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_base_url = %config.api_base_url, "parsed configuration");
        self.app = pollution_tracker::initialize(&config);
        self.open_command.clone_from(&config.open_command);

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes the resulting actions. Returns `true` if
    /// the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match FetchResponse::from_web_result(status, body, &context) {
                    Ok(response) => Event::FetchCompleted(response),
                    Err(e) => {
                        tracing::debug!(error = %e, "ignoring web request result");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::map_permission_result(status)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        pollution_tracker::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        match self.app.input_mode {
            InputMode::Editing => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Browsing => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::NewsDown,
                BareKey::Up | BareKey::Char('k') => Event::NewsUp,
                BareKey::Enter | BareKey::Char('o') => Event::OpenSelected,
                BareKey::Char('/') => Event::EditSearch,
                BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    fn map_permission_result(status: PermissionStatus) -> Event {
        let granted = match status {
            PermissionStatus::Granted => {
                vec![PermissionType::WebAccess, PermissionType::RunCommands]
            }
            PermissionStatus::Denied => vec![],
        };
        Event::PermissionsResult { granted }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::Fetch(request) => {
                tracing::debug!(kind = %request.kind, request_id = request.request_id, url = %request.url, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
            Action::OpenLink { url } => {
                tracing::debug!(url = %url, command = %self.open_command, "opening link");
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}

/// Native builds have no host to run in; the plugin only targets `wasm32-wasip1`.
#[cfg(not(target_family = "wasm"))]
fn main() {}
