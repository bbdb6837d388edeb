//! Health recommendations panel for the current AQI level.

use super::{panel_title, INDENT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HealthTipsPanel;

pub fn health_lines(panel: &HealthTipsPanel, theme: &Theme) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}({}){}",
        panel_title("💡 Health Recommendations", theme),
        Theme::fg(panel.color),
        panel.level,
        Theme::reset()
    )];

    let text = Theme::fg(&theme.colors.text_normal);
    lines.extend(panel.tips.iter().map(|tip| {
        format!("{INDENT}{}✓{} {text}{tip}{}", Theme::fg(panel.color), Theme::reset(), Theme::reset())
    }));
    lines
}
