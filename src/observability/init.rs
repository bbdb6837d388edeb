//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths::{get_data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` reported in every exported batch.
pub const SERVICE_NAME: &str = "PollutionTracker";

/// Installs the global subscriber: an `EnvFilter` built from `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `~/.local/share/zellij/pollution-tracker/pollution-tracker-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created, nothing is
/// installed. Calling this more than once has no further effect.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(trace_file_path(), resource);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer(tracer::SCOPE_NAME)));

    let _ = subscriber.try_init();
}
