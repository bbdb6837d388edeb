//! Search bar component renderer.
//!
//! Renders the location input as a bordered box. The border switches to the
//! active color while the box has focus, and a cursor block trails the query.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PLACEHOLDER: &str = "Enter city or location...";

/// Renders the 3-line search box starting at `row`. Returns `row + 3`.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Location: Delhi█     │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = if search.is_editing {
        &theme.colors.search_bar_active
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let label = " Location: ";
    let (text, text_color) = if search.query.is_empty() && !search.is_editing {
        (PLACEHOLDER.to_string(), &theme.colors.text_dim)
    } else {
        (search.query.clone(), &theme.colors.text_normal)
    };
    let cursor = if search.is_editing { "█" } else { "" };
    let used = label.chars().count() + text.chars().count() + cursor.chars().count();
    let padding = inner_width.saturating_sub(used);

    position_cursor(row + 1, 1);
    print!("{margin}{}│", Theme::fg(border));
    print!("{}{label}", Theme::fg(&theme.colors.text_dim));
    print!("{}{text}{cursor}", Theme::fg(text_color));
    print!("{}", " ".repeat(padding));
    print!("{}│{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + 3
}
