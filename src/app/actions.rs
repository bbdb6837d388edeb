//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions are
//! the boundary between pure state transitions and effectful operations like network
//! requests or running a command on the host; the plugin shim executes them in order.
//!
//! # Example
//!
//! ```rust
//! use pollution_tracker::app::Action;
//!
//! let actions = vec![Action::OpenLink {
//!     url: "https://example.org/article".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Performs a `GET` request through the host's `web_request`.
    ///
    /// The request's context map travels with it and comes back on the
    /// `WebRequestResult` event.
    Fetch(FetchRequest),

    /// Opens a news article with the configured opener command.
    OpenLink {
        /// Article URL.
        url: String,
    },
}
