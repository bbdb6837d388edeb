//! AQI panel: index value and level in the level's color, plus its advisory.

use super::{panel_title, INDENT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AqiPanel;

pub fn aqi_lines(aqi: &AqiPanel, theme: &Theme) -> Vec<String> {
    let level_fg = Theme::fg(aqi.color);
    vec![
        panel_title("Air Quality Index (AQI)", theme),
        format!(
            "{INDENT}{}{level_fg}{}{}  {level_fg}{}{}",
            Theme::bold(),
            aqi.value,
            Theme::reset(),
            aqi.level,
            Theme::reset()
        ),
        format!(
            "{INDENT}{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            aqi.description,
            Theme::reset()
        ),
    ]
}
