//! Sandbox path helpers.

use std::path::PathBuf;

const TRACE_FILE_NAME: &str = "pollution-tracker-otlp.json";

/// Directory for plugin-owned files: `/host/.local/share/zellij/pollution-tracker`.
///
/// `/host` is the cwd of the last focused terminal (usually the home directory), so
/// this normally resolves to `~/.local/share/zellij/pollution-tracker`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("pollution-tracker")
}

/// File the span exporter writes OTLP JSON lines to.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Maps `~` and `~/...` to the sandbox's `/host` mount. Other paths are unchanged.
///
/// ```
/// use pollution_tracker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_paths() {
        assert_eq!(
            trace_file_path(),
            PathBuf::from("/host/.local/share/zellij/pollution-tracker/pollution-tracker-otlp.json")
        );
    }

    #[test]
    fn tilde_only_expands_home_prefix() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }
}
