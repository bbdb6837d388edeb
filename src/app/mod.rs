//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/fetch
//! layers. It implements the event-driven architecture that powers the UI.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── WebRequestResult ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and request lifecycle types
//! - [`search`]: Primary location search controller
//! - [`tips`]: Health tips controller, dependent on the search result
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;
pub mod tips;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, RequestState};
pub use search::SearchController;
pub use state::AppState;
pub use tips::HealthTipsController;
