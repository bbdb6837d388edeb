//! Header component renderer.
//!
//! Renders the plugin title and subtitle, both centered.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title at `row` and the subtitle below it.
///
/// Returns the next available row (row + 2).
///
/// ```text
/// [padding] Pollution Tracker [padding]
/// [padding] Check air quality and pollution sources in your area [padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_padding = center_padding(&header.title, cols);
    let title_len = header.title.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(title_padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(title_padding + title_len)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(center_padding(&header.subtitle, cols)));
    print!("{}", header.subtitle);
    print!("{}", Theme::reset());

    row + 2
}
