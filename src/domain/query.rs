//! Validated search query.

use crate::domain::error::{PollutionTrackerError, Result};

/// A location search query that is guaranteed to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims `raw` and rejects it if nothing remains.
    ///
    /// # Errors
    ///
    /// Returns [`PollutionTrackerError::EmptyQuery`] for empty or all-whitespace input.
    ///
    /// # Examples
    ///
    /// ```
    /// use pollution_tracker::domain::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::parse("  Delhi ").unwrap().as_str(), "Delhi");
    /// assert!(SearchQuery::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PollutionTrackerError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
