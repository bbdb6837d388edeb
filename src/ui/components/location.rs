//! Location panel: place name, flag and country, state, address, coordinates.

use super::INDENT;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LocationPanel;

pub fn location_lines(location: &LocationPanel, theme: &Theme) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{}📍 {}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        location.name,
        Theme::reset()
    )];

    let dim = Theme::fg(&theme.colors.text_dim);
    if let Some(country) = location.country.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("{INDENT}{dim}{} {country}{}", location.flag, Theme::reset()));
    }
    for detail in [&location.state, &location.address, &location.coordinates]
        .into_iter()
        .flatten()
    {
        if !detail.is_empty() {
            lines.push(format!("{INDENT}{dim}{detail}{}", Theme::reset()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_follow_the_name() {
        let panel = LocationPanel {
            name: "Delhi".to_string(),
            flag: "🇮🇳",
            country: Some("India".to_string()),
            state: Some(String::new()),
            address: Some("New Delhi, India".to_string()),
            coordinates: Some("28.6139°N, 77.2090°E".to_string()),
        };
        let lines = location_lines(&panel, &Theme::default());

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("📍 Delhi"));
        assert!(lines[1].contains("🇮🇳 India"));
        assert!(lines[2].contains("New Delhi, India"));
        assert!(lines[3].contains("28.6139°N, 77.2090°E"));
    }
}
