//! Empty state component.
//!
//! Shown before the first search.

use super::centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Body lines for the empty state: a few blank lines, then the centered prompt.
pub fn empty_lines(empty: &EmptyState, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = vec![String::new(); 2];
    lines.push(centered_line(
        &format!("👆 {}", empty.message),
        &theme.colors.empty_state_fg,
        cols,
    ));
    lines
}
