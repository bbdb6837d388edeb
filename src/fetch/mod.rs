//! Backend fetch boundary.
//!
//! The plugin never performs network I/O itself. Controllers produce
//! [`FetchRequest`]s, the plugin shim hands them to the Zellij host via
//! `web_request`, and the host delivers the outcome as a `WebRequestResult` event that
//! is decoded back into a [`FetchResponse`].
//!
//! # Architecture
//!
//! - `client`: base URL handling, request builders and response decoding
//! - `messages`: request/response envelopes, context map codec, trace propagation

pub mod client;
pub mod messages;

pub use client::{parse_health_tips, parse_pollution_data, ApiClient, DEFAULT_API_BASE_URL};
pub use messages::{FetchKind, FetchRequest, FetchResponse, TraceContext};
