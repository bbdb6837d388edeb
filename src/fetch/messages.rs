//! Request and response envelopes for backend fetches.
//!
//! Outgoing requests are performed by the Zellij host (`web_request`), which hands the
//! result back later as a `WebRequestResult` event carrying the same context map that
//! was attached to the request. This module defines what goes into that map: the
//! request kind, the request id used by the stale-response guard, and the trace context
//! of the span that issued the request so the response can be linked back to it.

use crate::domain::error::{PollutionTrackerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const KIND_KEY: &str = "kind";
const REQUEST_ID_KEY: &str = "request_id";
const TRACE_ID_KEY: &str = "trace_id";
const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// Distributed tracing context carried across the host request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace context of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the current span
    /// context is invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes the issuing span the remote parent of spans created while the returned
    /// guard is alive.
    ///
    /// Returns `None` if either id fails to parse.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

/// Which backend endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchKind {
    /// `GET /api/pollution-data`, owned by the search controller.
    PollutionData,
    /// `GET /api/health-tips`, owned by the health tips controller.
    HealthTips,
}

impl FetchKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::PollutionData => "pollution-data",
            Self::HealthTips => "health-tips",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "pollution-data" => Some(Self::PollutionData),
            "health-tips" => Some(Self::HealthTips),
            _ => None,
        }
    }
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing `GET` request to be performed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: FetchKind,

    /// Id issued by the owning controller; echoed back in the response.
    pub request_id: u64,

    /// Fully built URL including the encoded query string.
    pub url: String,

    pub trace_context: Option<TraceContext>,
}

impl FetchRequest {
    /// Creates a request stamped with the current trace context.
    #[must_use]
    pub fn new(kind: FetchKind, request_id: u64, url: String) -> Self {
        Self {
            kind,
            request_id,
            url,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Encodes the request metadata as a `web_request` context map.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(KIND_KEY.to_string(), self.kind.as_str().to_string());
        context.insert(REQUEST_ID_KEY.to_string(), self.request_id.to_string());
        if let Some(trace) = &self.trace_context {
            context.insert(TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            context.insert(PARENT_SPAN_ID_KEY.to_string(), trace.parent_span_id.clone());
        }
        context
    }
}

/// A completed request as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub kind: FetchKind,
    pub request_id: u64,

    /// HTTP status. The host reports transport failures as a non-2xx status too.
    pub status: u16,

    pub body: Vec<u8>,
    pub trace_context: Option<TraceContext>,
}

impl FetchResponse {
    /// Rebuilds a response from a `WebRequestResult` event.
    ///
    /// # Errors
    ///
    /// Returns [`PollutionTrackerError::Context`] if the context map lacks a known
    /// request kind or a numeric request id, which happens for results of requests
    /// this plugin did not issue.
    pub fn from_web_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let kind = context
            .get(KIND_KEY)
            .and_then(|value| FetchKind::parse(value))
            .ok_or_else(|| PollutionTrackerError::Context("missing or unknown request kind".to_string()))?;

        let request_id = context
            .get(REQUEST_ID_KEY)
            .and_then(|value| value.parse::<u64>().ok())
            .ok_or_else(|| PollutionTrackerError::Context("missing or invalid request id".to_string()))?;

        let trace_context = match (context.get(TRACE_ID_KEY), context.get(PARENT_SPAN_ID_KEY)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            kind,
            request_id,
            status,
            body,
            trace_context,
        })
    }
}
