//! Loading indicator component.

use super::centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadingInfo;

pub fn loading_lines(loading: &LoadingInfo, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        centered_line(&format!("⏳ {}", loading.message), &theme.colors.empty_state_fg, cols),
    ]
}
