//! Composable UI component renderers.
//!
//! The fixed chrome (header, search box, borders, footer) is printed directly at
//! known rows. The body is assembled as a list of styled lines by the body
//! components and then windowed into the rows that remain.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`search`]: Location input box
//! - [`footer`]: Keybinding hints
//! - [`empty`], [`loading`], [`error`]: Status bodies
//! - [`location`], [`aqi`], [`sources`], [`health`], [`pollutants`], [`news`]:
//!   Result panels
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header: title + subtitle]
//! [Border]
//! [Search Bar - 3 lines]
//! [Body, windowed to the remaining rows]
//! [Border]
//! [Footer: keybindings + data sources]
//! ```

mod aqi;
mod empty;
mod error;
mod footer;
mod header;
mod health;
mod loading;
mod location;
mod news;
mod pollutants;
mod search;
mod sources;

use crate::ui::helpers::{center_padding, position_cursor, visible_window};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, ResultsView, UIViewModel};

use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Indentation of panel content under its title.
const INDENT: &str = "   ";

/// Styled body lines plus the line that must stay visible, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyLines {
    pub lines: Vec<String>,
    pub anchor: Option<usize>,
}

/// Bold panel heading.
fn panel_title(title: &str, theme: &Theme) -> String {
    format!(
        "{}{}{title}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.panel_title),
        Theme::reset()
    )
}

/// `text` centered in `cols` columns and drawn in `color`.
fn centered_line(text: &str, color: &str, cols: usize) -> String {
    format!(
        "{}{}{text}{}",
        " ".repeat(center_padding(text, cols)),
        Theme::fg(color),
        Theme::reset()
    )
}

/// Builds the body lines for whichever display state the view model is in.
#[must_use]
pub fn body_lines(body: &Body, theme: &Theme, cols: usize) -> BodyLines {
    match body {
        Body::Empty(empty) => BodyLines {
            lines: empty::empty_lines(empty, theme, cols),
            anchor: None,
        },
        Body::Loading(loading) => BodyLines {
            lines: loading::loading_lines(loading, theme, cols),
            anchor: None,
        },
        Body::Error(error) => BodyLines {
            lines: error::error_lines(error, theme, cols),
            anchor: None,
        },
        Body::Results(results) => results_lines(results, theme),
    }
}

fn results_lines(results: &ResultsView, theme: &Theme) -> BodyLines {
    let mut lines = vec![format!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        results.title,
        Theme::reset()
    )];
    if let Some(updated_at) = &results.updated_at {
        lines.push(format!(
            "{}Updated {updated_at}{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ));
    }

    let mut push_section = |section: Vec<String>| {
        lines.push(String::new());
        lines.extend(section);
    };

    push_section(location::location_lines(&results.location, theme));
    push_section(aqi::aqi_lines(&results.aqi, theme));
    push_section(sources::sources_lines(&results.sources, theme));
    if let Some(tips) = &results.health_tips {
        push_section(health::health_lines(tips, theme));
    }
    push_section(pollutants::pollutant_lines(&results.pollutants, theme));

    let mut anchor = None;
    if let Some(news) = &results.news {
        let (news_lines, news_anchor) = news::news_lines(news, theme);
        lines.push(String::new());
        let offset = lines.len();
        lines.extend(news_lines);
        anchor = news_anchor.map(|idx| offset + idx);
    }

    BodyLines { lines, anchor }
}

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for a view model.
///
/// Reserves 10 rows of chrome (blank, header [2], border, search box [3], border,
/// footer [2]); the body fills the rest, scrolled to keep the selected article visible.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let body_start = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let body_height = border_row.saturating_sub(body_start);

    let body = body_lines(&vm.body, theme, cols);
    let window = visible_window(body.lines.len(), body_height, body.anchor);
    for (offset, line) in body.lines[window].iter().enumerate() {
        position_cursor(body_start + offset, 1);
        print!("{line}{}", Theme::reset());
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{
        AqiPanel, EmptyState, ErrorInfo, LocationPanel, NewsPanel, NewsRow, SourcesPanel,
    };

    fn results(news: Option<NewsPanel>) -> ResultsView {
        ResultsView {
            title: "Pollution Data for Delhi".to_string(),
            location: LocationPanel {
                name: "Delhi".to_string(),
                flag: "🇮🇳",
                country: Some("India".to_string()),
                state: None,
                address: None,
                coordinates: None,
            },
            aqi: AqiPanel {
                value: "180".to_string(),
                level: "Unhealthy".to_string(),
                color: "#c0392b",
                description: "Air quality is harmful",
            },
            sources: SourcesPanel {
                rows: vec![],
                attribution: None,
            },
            health_tips: None,
            pollutants: vec![],
            news,
            updated_at: None,
        }
    }

    #[test]
    fn status_bodies_have_no_anchor() {
        let theme = Theme::default();
        let empty = body_lines(
            &Body::Empty(EmptyState {
                message: "Search for a location to see pollution data".to_string(),
            }),
            &theme,
            80,
        );
        assert!(empty.anchor.is_none());
        assert!(empty
            .lines
            .iter()
            .any(|l| l.contains("Search for a location to see pollution data")));

        let error = body_lines(
            &Body::Error(ErrorInfo {
                message: "Location not found".to_string(),
            }),
            &theme,
            80,
        );
        assert!(error.lines.iter().any(|l| l.contains("Location not found")));
    }

    #[test]
    fn results_anchor_is_selected_article() {
        let theme = Theme::default();
        let news = NewsPanel {
            count_label: "1 articles".to_string(),
            items: vec![NewsRow {
                title: "Smog returns".to_string(),
                description: String::new(),
                source: "PTI".to_string(),
                published: "Jan 15, 2024 10:30".to_string(),
                url: String::new(),
                is_selected: true,
            }],
        };
        let body = body_lines(&Body::Results(Box::new(results(Some(news)))), &theme, 80);

        let anchor = body.anchor.unwrap();
        assert!(body.lines[anchor].contains("Smog returns"));
        assert!(body.lines[0].contains("Pollution Data for Delhi"));
        assert!(body.lines.iter().any(|l| l.contains("🇮🇳 India")));
    }

    #[test]
    fn results_without_news_have_no_anchor() {
        let body = body_lines(&Body::Results(Box::new(results(None))), &Theme::default(), 80);
        assert!(body.anchor.is_none());
        assert!(!body.lines.iter().any(|l| l.contains("Pollution News")));
    }
}
