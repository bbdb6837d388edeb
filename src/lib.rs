//! Pollution Tracker: a Zellij plugin for checking air quality by location.
//!
//! Type a location, press Enter, and the plugin shows:
//! - The Air Quality Index with its level, color and description
//! - Estimated pollution sources with impact badges
//! - Health recommendations for the current AQI level
//! - Detailed pollutant concentrations
//! - Recent pollution news, openable from the keyboard
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Search and health tips controllers               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                      ┌───────────────┐
//! │ UI Layer      │                      │ Fetch Layer   │
//! │ (ui/)         │                      │ (fetch/)      │
//! │ - Formatters  │                      │ - URLs        │
//! │ - Components  │                      │ - Decoding    │
//! │ - Theming     │                      │ - Context map │
//! └───────────────┘                      └───────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types, query, pollution models (domain/)   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never talks to the host. Handlers return [`Action`]s and the shim
//! turns them into `web_request`, `run_command` and `hide_self` calls, so every
//! state transition is testable natively.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/pollution-tracker.wasm" {
//!         api_base_url "http://localhost:5001"
//!         open_command "xdg-open"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pollution_tracker::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "Delhi".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! let Action::Fetch(request) = &actions[0] else { unreachable!() };
//! assert_eq!(request.url, "http://localhost:5001/api/pollution-data?location=Delhi");
//! # Ok::<(), pollution_tracker::PollutionTrackerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{PollutionTrackerError, Result};
pub use ui::Theme;

use fetch::{ApiClient, DEFAULT_API_BASE_URL};
use std::collections::BTreeMap;

/// Command used to open news links when none is configured.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL.
    ///
    /// Falls back to the `POLLUTION_TRACKER_API_BASE_URL` build-time variable, then
    /// to [`DEFAULT_API_BASE_URL`].
    pub api_base_url: String,

    /// Program used to open news links. Default: `xdg-open`
    pub open_command: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn` or `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url().to_string(),
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// The build-time override if set and non-blank, else the built-in default.
fn default_api_base_url() -> &'static str {
    option_env!("POLLUTION_TRACKER_API_BASE_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

/// Reads an option, treating blank values as unset.
fn non_blank(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(String::from)
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored and blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pollution_tracker::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "https://air.example.org".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "https://air.example.org");
    /// assert_eq!(config.open_command, "xdg-open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            api_base_url: non_blank(config, "api_base_url")
                .unwrap_or_else(|| default_api_base_url().to_string()),
            open_command: non_blank(config, "open_command")
                .unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string()),
            theme_name: non_blank(config, "theme"),
            theme_file: non_blank(config, "theme_file"),
            trace_level: non_blank(config, "trace_level"),
        }
    }

    /// Builds the API client, falling back to the default endpoint if the
    /// configured one is invalid.
    #[must_use]
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.api_base_url).unwrap_or_else(|e| {
            tracing::warn!(
                api_base_url = %self.api_base_url,
                error = %e,
                "invalid api_base_url, using {DEFAULT_API_BASE_URL}"
            );
            ApiClient::default()
        })
    }

    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the application state for `config`.
///
/// Resolves the API client and theme once. Starts idle with the search bar focused.
///
/// ```rust
/// use pollution_tracker::{initialize, Config, InputMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.input_mode, InputMode::Editing);
/// assert!(state.search.result().is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing pollution tracker plugin");
    AppState::new(config.api_client(), config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("api_base_url", "  "), ("theme", ""), ("open_command", " ")]));
        assert_eq!(config.api_base_url, default_api_base_url());
        assert_eq!(config.open_command, "xdg-open");
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn parses_all_options() {
        let config = Config::from_zellij(&map(&[
            ("api_base_url", "https://air.example.org/tracker"),
            ("open_command", "open"),
            ("theme", "catppuccin-frappe"),
            ("theme_file", "~/dusk.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.open_command, "open");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.theme_file.as_deref(), Some("~/dusk.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.api_client().pollution_data_url("Delhi"),
            "https://air.example.org/tracker/api/pollution-data?location=Delhi"
        );
    }

    #[test]
    fn invalid_base_url_falls_back() {
        let config = Config::from_zellij(&map(&[("api_base_url", "ftp://nope")]));
        assert_eq!(config.api_client(), ApiClient::default());
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/definitely/missing/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, Theme::default().name);
    }

    #[test]
    fn named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, "catppuccin-latte");
    }
}
