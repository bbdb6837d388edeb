//! Domain layer for the Pollution Tracker plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific APIs
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`query`]: Validated search query
//! - [`pollution`]: Pollution data returned for a location
//! - [`health`]: Health advice keyed by AQI level
//!
//! # Examples
//!
//! ```
//! use pollution_tracker::domain::{AqiLevel, Result, SearchQuery};
//!
//! fn level_for(query: &str) -> Result<AqiLevel> {
//!     let _query = SearchQuery::parse(query)?;
//!     Ok(AqiLevel::from_label("Moderate"))
//! }
//!
//! assert_eq!(level_for("Paris").unwrap(), AqiLevel::Moderate);
//! ```

pub mod error;
pub mod health;
pub mod pollution;
pub mod query;

pub use error::{PollutionTrackerError, Result, FETCH_FAILED_MESSAGE};
pub use health::HealthTips;
pub use pollution::{AqiData, AqiLevel, Coordinates, Impact, NewsItem, PollutionResult, PollutionSource};
pub use query::SearchQuery;
