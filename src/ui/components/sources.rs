//! Pollution sources panel.
//!
//! One row per source with a share bar colored by impact, the raw percentage and
//! an impact badge. The attribution line follows when the backend names one.

use super::{panel_title, INDENT};
use crate::ui::format::SOURCE_BAR_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SourceRow, SourcesPanel};

const NAME_WIDTH: usize = 24;

pub fn sources_lines(sources: &SourcesPanel, theme: &Theme) -> Vec<String> {
    let mut lines = vec![panel_title("Pollution Sources", theme)];

    if sources.rows.is_empty() {
        lines.push(format!(
            "{INDENT}{}No source data available{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ));
    }
    lines.extend(sources.rows.iter().map(|row| source_line(row, theme)));

    if let Some(attribution) = sources.attribution.as_deref().filter(|a| !a.is_empty()) {
        lines.push(format!(
            "{INDENT}{}{}Source: {attribution}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ));
    }
    lines
}

fn source_line(row: &SourceRow, theme: &Theme) -> String {
    let name: String = if row.name.chars().count() > NAME_WIDTH {
        row.name.chars().take(NAME_WIDTH - 1).chain(['…']).collect()
    } else {
        row.name.clone()
    };
    let impact_fg = Theme::fg(row.impact_color);
    let filled = "█".repeat(row.bar_cells);
    let empty = "░".repeat(SOURCE_BAR_WIDTH.saturating_sub(row.bar_cells));
    let width = NAME_WIDTH;

    let mut line = format!(
        "{INDENT}{}{name:<width$}{} {impact_fg}{filled}{}{empty}{} {:>5}%",
        Theme::fg(&theme.colors.text_normal),
        Theme::reset(),
        Theme::fg(&theme.colors.bar_empty),
        Theme::reset(),
        row.percentage,
    );
    if !row.impact.is_empty() {
        line.push_str(&format!("  {}{impact_fg}{}{}", Theme::bold(), row.impact, Theme::reset()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, percentage: f64, bar_cells: usize, impact: &str) -> SourceRow {
        SourceRow {
            name: name.to_string(),
            percentage,
            bar_cells,
            impact: impact.to_string(),
            impact_color: "#e74c3c",
        }
    }

    #[test]
    fn rows_and_attribution() {
        let panel = SourcesPanel {
            rows: vec![row("Vehicle Emissions", 45.0, 9, "HIGH")],
            attribution: Some("CPCB emissions inventory".to_string()),
        };
        let lines = sources_lines(&panel, &Theme::default());

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Vehicle Emissions"));
        assert!(lines[1].contains(&"█".repeat(9)));
        assert!(lines[1].contains(&"░".repeat(11)));
        assert!(lines[1].contains("45%"));
        assert!(lines[1].contains("HIGH"));
        assert!(lines[2].contains("Source: CPCB emissions inventory"));
    }

    #[test]
    fn unknown_impact_has_no_badge_and_long_names_are_cut() {
        let panel = SourcesPanel {
            rows: vec![row("Industrial and Construction Activity Dust", 10.0, 2, "")],
            attribution: None,
        };
        let lines = sources_lines(&panel, &Theme::default());

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Industrial and Construc…"));
        assert!(!lines[1].contains(Theme::bold()));
    }

    #[test]
    fn empty_sources() {
        let panel = SourcesPanel {
            rows: vec![],
            attribution: None,
        };
        let lines = sources_lines(&panel, &Theme::default());
        assert!(lines[1].contains("No source data available"));
    }
}
