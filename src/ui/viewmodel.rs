//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` via `compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data: every
//! fallback (unknown location, absent readings, unparseable dates) has already been
//! applied.
//!
//! The main area is a [`Body`] enum, so the empty, loading, error and results
//! displays are mutually exclusive.
//!
//! # Example
//!
//! ```rust
//! use pollution_tracker::ui::viewmodel::{
//!     Body, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
//! };
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Pollution Tracker".to_string(),
//!         subtitle: "Check air quality and pollution sources in your area".to_string(),
//!     },
//!     search_bar: SearchBarInfo { query: String::new(), is_editing: true },
//!     body: Body::Empty(EmptyState {
//!         message: "Search for a location to see pollution data".to_string(),
//!     }),
//!     footer: FooterInfo {
//!         keybindings: "Enter: search".to_string(),
//!         attribution: "Data sources: WeatherAPI.com".to_string(),
//!     },
//! };
//! assert!(matches!(vm.body, Body::Empty(_)));
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Nothing searched yet.
    Empty(EmptyState),
    /// The primary search is in flight.
    Loading(LoadingInfo),
    /// The primary search failed.
    Error(ErrorInfo),
    /// The primary search succeeded.
    Results(Box<ResultsView>),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
    /// Data providers behind the results.
    pub attribution: String,
}

/// Search input box state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go into the box.
    pub is_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingInfo {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

/// Everything shown for a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// "Pollution Data for {location}".
    pub title: String,
    pub location: LocationPanel,
    pub aqi: AqiPanel,
    pub sources: SourcesPanel,
    /// Present only when the result carries an AQI level.
    pub health_tips: Option<HealthTipsPanel>,
    pub pollutants: Vec<PollutantRow>,
    /// Present only when the result carries news.
    pub news: Option<NewsPanel>,
    /// Formatted generation time of the result, if the backend sent one.
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPanel {
    pub name: String,
    pub flag: &'static str,
    pub country: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    /// Formatted latitude and longitude, when both are known.
    pub coordinates: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AqiPanel {
    /// AQI value, `"0"` when absent.
    pub value: String,
    /// Level label, empty when absent.
    pub level: String,
    /// Hex color for the level.
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourcesPanel {
    pub rows: Vec<SourceRow>,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub name: String,
    pub percentage: f64,
    /// Filled cells of the share bar.
    pub bar_cells: usize,
    /// Impact badge text, empty when the impact is unknown.
    pub impact: String,
    pub impact_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthTipsPanel {
    pub level: String,
    pub color: &'static str,
    /// Possibly empty while loading or after a failed fetch.
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollutantRow {
    pub label: &'static str,
    /// Two-decimal reading or `"N/A"`.
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPanel {
    /// "{n} articles".
    pub count_label: String,
    pub items: Vec<NewsRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRow {
    /// Title cut to 60 characters.
    pub title: String,
    /// Description cut to 80 characters; empty when absent.
    pub description: String,
    pub source: String,
    /// Formatted publication date or "Invalid Date".
    pub published: String,
    pub url: String,
    pub is_selected: bool,
}
