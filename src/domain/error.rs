//! Error types for the Pollution Tracker plugin.
//!
//! This module defines the centralized error type [`PollutionTrackerError`] and a type
//! alias [`Result`] used throughout the plugin. All errors are implemented with the
//! `thiserror` crate.
//!
//! Only failures of the primary pollution-data search ever reach the user; they are
//! turned into banner text by [`PollutionTrackerError::user_message`]. Every other
//! failure is absorbed where it originates and logged.

use thiserror::Error;

/// Banner text shown when a search fails without a backend-supplied message.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch pollution data. Please try again.";

/// The main error type for Pollution Tracker operations.
///
/// # Examples
///
/// ```
/// use pollution_tracker::PollutionTrackerError;
///
/// let err = PollutionTrackerError::Api {
///     status: 404,
///     message: Some("Location not found".to_string()),
/// };
/// assert_eq!(err.user_message(), "Location not found");
/// ```
#[derive(Debug, Error)]
pub enum PollutionTrackerError {
    /// The search query was empty after trimming whitespace.
    ///
    /// Raised locally before any request is issued. The display text is the exact
    /// message shown to the user.
    #[error("Please enter a location")]
    EmptyQuery,

    /// The backend answered with a non-success status.
    ///
    /// `message` holds the `error` field of the JSON body when the backend supplied
    /// one. Transport failures reported by the Zellij host land here too, with no
    /// message.
    #[error("API error (status {status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Backend-supplied `error` string, if any.
        message: Option<String>,
    },

    /// A response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The context attached to a web request result is missing or malformed.
    ///
    /// Occurs when a `WebRequestResult` event arrives without the request kind or id
    /// this plugin stamps on every outgoing request.
    #[error("Request context error: {0}")]
    Context(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme loading or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl PollutionTrackerError {
    /// Returns the text displayed in the error banner for this failure.
    ///
    /// Validation errors and backend-supplied messages are shown verbatim; every
    /// other failure collapses to [`FETCH_FAILED_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => self.to_string(),
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// A specialized `Result` type for Pollution Tracker operations.
pub type Result<T> = std::result::Result<T, PollutionTrackerError>;
