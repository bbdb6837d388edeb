//! Color themes and 24-bit ANSI styling.
//!
//! The chrome (header, borders, search box, panel headings, links) is colored from
//! a [`Theme`]. AQI level and impact colors come from [`crate::ui::format`] and do
//! not change with the theme.
//!
//! Four Catppuccin flavors are embedded: `catppuccin-mocha` (the default),
//! `catppuccin-latte`, `catppuccin-frappe` and `catppuccin-macchiato`. A custom
//! theme is a TOML file with the same shape:
//!
//! ```toml
//! name = "dusk"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! # header_bg = "#1e1e2e"   (optional)
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#45475a"
//! search_bar_active = "#f5c2e7"
//! panel_title = "#cba6f7"
//! error_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! link_fg = "#94e2d5"
//! bar_empty = "#45475a"
//! ```
//!
//! ```rust
//! use pollution_tracker::ui::theme::Theme;
//!
//! let latte = Theme::from_name("catppuccin-latte").unwrap();
//! let heading = format!("{}{}AQI{}", Theme::bold(), Theme::fg(&latte.colors.panel_title), Theme::reset());
//! assert!(heading.ends_with("AQI\u{1b}[0m"));
//! ```

use crate::domain::error::{PollutionTrackerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Embedded themes, by name.
const BUILTIN_THEMES: [(&str, &str); 4] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

/// Theme used when none is configured or the configured one fails to load.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

const ESC: &str = "\u{001b}[";

/// A named palette for the plugin chrome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each chrome element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title line.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlighted news article.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Subtitles, metadata and the footer.
    pub text_dim: String,

    pub border: String,
    /// Search box outline while browsing and while editing.
    pub search_bar_border: String,
    pub search_bar_active: String,

    pub panel_title: String,
    pub error_fg: String,
    /// Empty-state and loading messages.
    pub empty_state_fg: String,
    pub link_fg: String,
    /// Track behind the source share bars.
    pub bar_empty: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_THEMES.iter().map(|(name, _)| *name)
    }

    /// Built-in theme called `name`, or `None` if there is no such theme.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_THEMES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Reads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`PollutionTrackerError::Theme`] if the file is unreadable or not a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| PollutionTrackerError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&source)
            .map_err(|e| PollutionTrackerError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Sets the foreground to a hex color.
    ///
    /// ```rust
    /// use pollution_tracker::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#c0392b"), "\u{1b}[38;2;192;57;43m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = rgb(hex);
        format!("{ESC}38;2;{r};{g};{b}m")
    }

    /// Sets the background to a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = rgb(hex);
        format!("{ESC}48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// `#rrggbb` or `rrggbb` as channels; anything else is white.
fn rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |at: usize| {
        digits
            .get(at..at + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    match (digits.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => (r, g, b),
        _ => (255, 255, 255),
    }
}

impl Default for Theme {
    /// # Panics
    ///
    /// Panics if the embedded default theme fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("embedded default theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::builtin_names().count(), 4);
        for name in Theme::builtin_names() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_to_ansi() {
        assert_eq!(Theme::fg("#2ecc71"), "\u{1b}[38;2;46;204;113m");
        assert_eq!(Theme::bg("c0392b"), "\u{1b}[48;2;192;57;43m");
        assert_eq!(Theme::fg("oops"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#ééé"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = include_str!("../../themes/catppuccin-mocha.toml");
        file.write_all(mocha.replace("catppuccin-mocha", "mine").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn invalid_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(PollutionTrackerError::Theme(_))
        ));
        assert!(Theme::from_file("/nonexistent/theme.toml").is_err());
    }
}
