//! Footer component renderer.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Keybinding hints and the data-source line, each centered and cut to `cols`.
pub fn footer_lines(footer: &FooterInfo, theme: &Theme, cols: usize) -> [String; 2] {
    let centered = |text: &str, style: &str| {
        let text: String = text.chars().take(cols).collect();
        format!(
            "{}{style}{}{text}{}",
            " ".repeat(center_padding(&text, cols)),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        )
    };

    [
        centered(&footer.keybindings, ""),
        centered(&footer.attribution, Theme::dim()),
    ]
}

/// Renders the footer at `row` and `row + 1`. Returns `row + 2`.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    for (offset, line) in footer_lines(footer, theme, cols).iter().enumerate() {
        position_cursor(row + offset, 1);
        print!("{line}");
    }
    row + 2
}
