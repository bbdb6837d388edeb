//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the two fetch
//! controllers, the search input, the input mode, the news selection and the theme.
//! View models are computed on demand from state snapshots.
//!
//! # Derived Fetches
//!
//! Whenever the primary search state changes, [`AppState::sync_health_tips`] hands
//! the current AQI level to the health tips controller, which decides whether a new
//! tips request is needed.
//!
//! # Example
//!
//! ```rust
//! use pollution_tracker::app::AppState;
//! use pollution_tracker::fetch::ApiClient;
//! use pollution_tracker::ui::Theme;
//!
//! let state = AppState::new(ApiClient::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "Pollution Tracker");
//! ```

use super::modes::{InputMode, RequestState};
use super::search::SearchController;
use super::tips::HealthTipsController;
use crate::domain::{NewsItem, PollutionResult};
use crate::fetch::{ApiClient, FetchKind, FetchRequest, FetchResponse};
use crate::ui::format::{
    country_flag, format_aqi, format_coordinates, format_pollutant, format_timestamp,
    impact_bar_cells, impact_color, level_color, level_description, truncate, SOURCE_BAR_WIDTH,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AqiPanel, Body, EmptyState, ErrorInfo, FooterInfo, HeaderInfo, HealthTipsPanel, LoadingInfo,
    LocationPanel, NewsPanel, NewsRow, PollutantRow, ResultsView, SearchBarInfo, SourceRow,
    SourcesPanel, UIViewModel,
};

const TITLE: &str = "Pollution Tracker";
const SUBTITLE: &str = "Check air quality and pollution sources in your area";
const EMPTY_MESSAGE: &str = "Search for a location to see pollution data";
const LOADING_MESSAGE: &str = "Loading pollution data...";
const UNKNOWN_LOCATION: &str = "Unknown Location";
const DATA_SOURCES: &str =
    "Data sources: WeatherAPI.com, OpenStreetMap, NewsAPI.org, Government Environmental Agencies";

const NEWS_TITLE_MAX: usize = 60;
const NEWS_DESCRIPTION_MAX: usize = 80;

const POLLUTANT_UNIT: &str = "µg/m³";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Primary location search.
    pub search: SearchController,

    /// Health tips for the current result's AQI level.
    pub health_tips: HealthTipsController,

    /// Current contents of the search bar.
    pub input: String,

    pub input_mode: InputMode,

    /// Index of the highlighted news article within the current result.
    ///
    /// Reset to zero whenever a new result arrives; wraps during navigation.
    pub selected_news: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: no result, editing mode, empty search bar.
    #[must_use]
    pub fn new(api: ApiClient, theme: Theme) -> Self {
        Self {
            search: SearchController::new(api.clone()),
            health_tips: HealthTipsController::new(api),
            input: String::new(),
            input_mode: InputMode::Editing,
            selected_news: 0,
            theme,
        }
    }

    /// Submits the search bar contents.
    ///
    /// Returns the requests to issue: the search itself, if the query is valid.
    /// Any previous result is cleared, which also resets the health tips.
    pub fn submit_search(&mut self) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        requests.extend(self.search.submit(&self.input));
        self.selected_news = 0;
        requests.extend(self.sync_health_tips());
        requests
    }

    /// Routes a completed fetch to the controller that issued it.
    ///
    /// Returns whether anything visible changed, plus any follow-up requests.
    pub fn apply_response(&mut self, response: &FetchResponse) -> (bool, Vec<FetchRequest>) {
        match response.kind {
            FetchKind::PollutionData => {
                if !self.search.resolve(response) {
                    return (false, vec![]);
                }
                self.selected_news = 0;
                let follow_up = self.sync_health_tips().into_iter().collect();
                (true, follow_up)
            }
            FetchKind::HealthTips => (self.health_tips.resolve(response), vec![]),
        }
    }

    /// Re-evaluates the health tips dependency on the current AQI level.
    pub fn sync_health_tips(&mut self) -> Option<FetchRequest> {
        let level = self.search.aqi_level().cloned();
        self.health_tips.observe(level.as_ref())
    }

    /// News articles of the current result; empty when there is none.
    #[must_use]
    pub fn news(&self) -> &[NewsItem] {
        self.search
            .result()
            .map_or(&[], |result| result.pollution_news.as_slice())
    }

    /// Moves the news selection down by one, wrapping to the top.
    pub fn move_news_down(&mut self) {
        let count = self.news().len();
        if count == 0 {
            return;
        }
        self.selected_news = (self.selected_news + 1) % count;
    }

    /// Moves the news selection up by one, wrapping to the bottom.
    pub fn move_news_up(&mut self) {
        let count = self.news().len();
        if count == 0 {
            return;
        }
        if self.selected_news == 0 {
            self.selected_news = count - 1;
        } else {
            self.selected_news -= 1;
        }
    }

    #[must_use]
    pub fn selected_news_item(&self) -> Option<&NewsItem> {
        self.news().get(self.selected_news)
    }

    /// Computes a renderable UI view model from current state.
    ///
    /// `rows` and `cols` are accepted for symmetry with the renderer; the body is
    /// windowed to the terminal height at render time.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!(
            "compute_viewmodel",
            rows,
            cols,
            search_state = self.search.state().name()
        )
        .entered();

        let body = match self.search.state() {
            RequestState::Idle => Body::Empty(EmptyState {
                message: EMPTY_MESSAGE.to_string(),
            }),
            RequestState::Loading => Body::Loading(LoadingInfo {
                message: LOADING_MESSAGE.to_string(),
            }),
            RequestState::Error(message) => Body::Error(ErrorInfo {
                message: message.clone(),
            }),
            RequestState::Success(result) => Body::Results(Box::new(self.compute_results(result))),
        };

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                subtitle: SUBTITLE.to_string(),
            },
            search_bar: SearchBarInfo {
                query: self.input.clone(),
                is_editing: self.input_mode == InputMode::Editing,
            },
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_results(&self, result: &PollutionResult) -> ResultsView {
        let name = if result.location.trim().is_empty() {
            UNKNOWN_LOCATION.to_string()
        } else {
            result.location.clone()
        };
        let level = result.aqi_level.as_ref();

        let location = LocationPanel {
            name: name.clone(),
            flag: country_flag(result.country.as_deref()),
            country: result.country.clone(),
            state: result.state.clone(),
            address: result.address.clone(),
            coordinates: result
                .coordinates
                .and_then(|c| format_coordinates(c.latitude, c.longitude)),
        };

        let aqi = AqiPanel {
            value: format_aqi(result.aqi_data.aqi),
            level: level.map(ToString::to_string).unwrap_or_default(),
            color: level_color(level),
            description: level_description(level),
        };

        let sources = SourcesPanel {
            rows: result
                .pollution_sources
                .iter()
                .map(|source| SourceRow {
                    name: source.source.clone(),
                    percentage: source.percentage,
                    bar_cells: impact_bar_cells(source.percentage, SOURCE_BAR_WIDTH),
                    impact: source.impact.as_str().to_uppercase(),
                    impact_color: impact_color(&source.impact),
                })
                .collect(),
            attribution: result.source_data_attribution.clone(),
        };

        let health_tips = level.map(|level| HealthTipsPanel {
            level: level.to_string(),
            color: level_color(Some(level)),
            tips: self.health_tips.tips().to_vec(),
        });

        let readings = &result.aqi_data;
        let pollutants = [
            ("PM2.5", readings.pm25),
            ("PM10", readings.pm10),
            ("NO₂", readings.no2),
            ("O₃", readings.o3),
            ("SO₂", readings.so2),
            ("CO", readings.co),
        ]
        .into_iter()
        .map(|(label, value)| PollutantRow {
            label,
            value: format_pollutant(value),
            unit: POLLUTANT_UNIT,
        })
        .collect();

        let news = (!result.pollution_news.is_empty()).then(|| NewsPanel {
            count_label: format!("{} articles", result.pollution_news.len()),
            items: result
                .pollution_news
                .iter()
                .enumerate()
                .map(|(idx, item)| NewsRow {
                    title: truncate(item.title.as_str(), NEWS_TITLE_MAX),
                    description: truncate(item.description.as_deref(), NEWS_DESCRIPTION_MAX),
                    source: item.source.clone(),
                    published: format_timestamp(&item.published_at),
                    url: item.url.clone(),
                    is_selected: idx == self.selected_news,
                })
                .collect(),
        });

        ResultsView {
            title: format!("Pollution Data for {name}"),
            location,
            aqi,
            sources,
            health_tips,
            pollutants,
            news,
            updated_at: result.timestamp.as_deref().map(format_timestamp),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Editing => "Type a location  Enter: search  ESC: browse results",
            InputMode::Browsing if self.news().is_empty() => "/: edit search  q/ESC: close",
            InputMode::Browsing => "j/k: select article  Enter/o: open  /: edit search  q/ESC: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            attribution: DATA_SOURCES.to_string(),
        }
    }
}
