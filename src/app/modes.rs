//! Input mode and request lifecycle state types.
//!
//! # State Machine
//!
//! The plugin operates in one of two input modes:
//! - **Editing**: keystrokes go into the search bar, `Enter` submits
//! - **Browsing**: keystrokes navigate the results (news selection, links, quit)
//!
//! Every backend fetch is tracked by a [`RequestState`]: exactly one of `Idle`,
//! `Loading`, `Success` or `Error` holds at any time, so a result and an error can
//! never be present together.
//!
//! # Example
//!
//! ```rust
//! use pollution_tracker::app::modes::{InputMode, RequestState};
//!
//! let mode = InputMode::Editing;
//! let state: RequestState<u32> = RequestState::Loading;
//! assert!(state.is_loading());
//! assert_eq!(state.success(), None);
//! # let _ = mode;
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the search bar.
    ///
    /// Accepts characters, backspace, enter (submit) and escape (switch to browsing).
    Editing,

    /// Navigating the displayed results.
    ///
    /// Available keybindings: j/k (select article), enter/o (open article),
    /// / (edit search), q/esc (close).
    Browsing,
}

/// Lifecycle of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Success(T),
    /// The latest request failed; the message is display-ready.
    Error(String),
}

impl<T> RequestState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the successful value, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short variant name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}
