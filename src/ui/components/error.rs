//! Error banner component.
//!
//! Displays the failure message of the primary search; nothing else is shown
//! alongside it.

use super::centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorInfo;

pub fn error_lines(error: &ErrorInfo, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "{}{}",
            Theme::bold(),
            centered_line(&format!("⚠️  {}", error.message), &theme.colors.error_fg, cols)
        ),
    ]
}
