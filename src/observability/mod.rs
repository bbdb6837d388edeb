//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces go to `~/.local/share/zellij/pollution-tracker/pollution-tracker-otlp.json`
//! - The file rotates at 10 MB and keeps 3 backups
//! - Every line is a standalone OTLP/JSON `resourceSpans` document
//! - The level comes from the `trace_level` plugin option, default `"info"`
//!
//! Spans started while issuing a `web_request` are linked to the span that handles
//! its response through the trace context carried in the request's context map.
//!
//! ```rust,no_run
//! use pollution_tracker::observability::init_tracing;
//! use pollution_tracker::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME};
