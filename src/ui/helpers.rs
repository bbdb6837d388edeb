//! Shared rendering utilities.
//!
//! Cursor positioning, centering and the windowing used to fit the results body
//! into the rows left between the search bar and the footer.

use std::ops::Range;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Left padding that centers `text` in `cols` columns.
///
/// Width is counted in characters, so wide glyphs may shift the text slightly.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text.chars().count()) / 2
}

/// Returns the `height`-line slice of `total` lines to show.
///
/// Without an anchor the window starts at the top. With one, the anchor is kept
/// roughly in the middle and the window is shifted back inside the content near
/// either end, the same way a list keeps its selection visible.
///
/// ```rust
/// use pollution_tracker::ui::helpers::visible_window;
///
/// assert_eq!(visible_window(10, 4, None), 0..4);
/// assert_eq!(visible_window(10, 4, Some(5)), 3..7);
/// assert_eq!(visible_window(10, 4, Some(9)), 6..10);
/// assert_eq!(visible_window(3, 10, Some(2)), 0..3);
/// ```
#[must_use]
pub fn visible_window(total: usize, height: usize, anchor: Option<usize>) -> Range<usize> {
    if total <= height {
        return 0..total;
    }

    let start = anchor.map_or(0, |anchor| {
        anchor
            .saturating_sub(height / 2)
            .min(total - height)
    });
    start..start + height
}
