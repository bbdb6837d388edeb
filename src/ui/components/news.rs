//! News panel.
//!
//! Each article takes three lines: title, description and a metadata line with
//! source, date and link. The selected article is highlighted and its title line
//! is reported as the scroll anchor so the renderer keeps it on screen.

use super::{panel_title, INDENT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NewsPanel;

/// Returns the panel lines and the index (within them) of the selected title.
pub fn news_lines(news: &NewsPanel, theme: &Theme) -> (Vec<String>, Option<usize>) {
    let mut lines = vec![format!(
        "{} {}{}{}",
        panel_title("📰 Pollution News", theme),
        Theme::fg(&theme.colors.text_dim),
        news.count_label,
        Theme::reset()
    )];
    let mut anchor = None;

    for item in &news.items {
        if item.is_selected {
            anchor = Some(lines.len());
            lines.push(format!(
                "{}{}{}▶ {}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg),
                item.title,
                Theme::reset()
            ));
        } else {
            lines.push(format!(
                "  {}{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.text_normal),
                item.title,
                Theme::reset()
            ));
        }

        if !item.description.is_empty() {
            lines.push(format!(
                "{INDENT}{}{}{}",
                Theme::fg(&theme.colors.text_normal),
                item.description,
                Theme::reset()
            ));
        }

        let mut meta = format!(
            "{INDENT}{}{} · {}{}",
            Theme::fg(&theme.colors.text_dim),
            item.source,
            item.published,
            Theme::reset()
        );
        if !item.url.is_empty() {
            meta.push_str(&format!("  {}Read →{}", Theme::fg(&theme.colors.link_fg), Theme::reset()));
        }
        lines.push(meta);
    }

    (lines, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::NewsRow;

    fn row(title: &str, description: &str, is_selected: bool) -> NewsRow {
        NewsRow {
            title: title.to_string(),
            description: description.to_string(),
            source: "Reuters".to_string(),
            published: "Jan 15, 2024 10:30".to_string(),
            url: "https://example.org".to_string(),
            is_selected,
        }
    }

    #[test]
    fn anchor_points_at_selected_title() {
        let panel = NewsPanel {
            count_label: "2 articles".to_string(),
            items: vec![row("First", "", false), row("Second", "Details", true)],
        };
        let (lines, anchor) = news_lines(&panel, &Theme::default());

        assert!(lines[0].contains("2 articles"));
        // First article has no description: title + meta.
        assert_eq!(anchor, Some(3));
        assert!(lines[3].contains("▶ Second"));
        assert!(lines[4].contains("Details"));
        assert!(lines[5].contains("Reuters · Jan 15, 2024 10:30"));
        assert!(lines[5].contains("Read →"));
        assert_eq!(lines.len(), 6);
    }
}
