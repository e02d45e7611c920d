// service/src/telemetry.rs

//! Tracing subscriber setup for the server binary.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

/// INFO and above unless `directives` (normally `RUST_LOG`) say otherwise.
/// Unparseable directives are skipped rather than failing startup.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .parse_lossy(directives.unwrap_or_default())
}

pub fn init_tracing(json: bool) {
  let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}
