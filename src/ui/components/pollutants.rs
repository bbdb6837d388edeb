//! Detailed pollutant levels.

use super::{panel_title, INDENT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PollutantRow;

pub fn pollutant_lines(rows: &[PollutantRow], theme: &Theme) -> Vec<String> {
    let mut lines = vec![panel_title("Detailed Pollutant Levels", theme)];
    let label_fg = Theme::fg(&theme.colors.text_dim);
    let value_fg = Theme::fg(&theme.colors.text_normal);

    for row in rows {
        let unit = if row.value == "N/A" { "" } else { row.unit };
        lines.push(format!(
            "{INDENT}{label_fg}{:<6}{} {value_fg}{:>10} {unit}{}",
            row.label,
            Theme::reset(),
            row.value,
            Theme::reset()
        ));
    }
    lines
}
