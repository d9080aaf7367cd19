use anyhow::Context;

use tracing::{subscriber::set_global_default, Subscriber};

use tracing_log::LogTracer;

use tracing_subscriber::fmt::{self, format::FmtSpan, MakeWriter};
use tracing_subscriber::EnvFilter;

/// Build a formatting subscriber writing to `sink`.
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn create_subscriber<Sink>(default_filter: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(sink)
        .finish()
}

/// Register the subscriber globally and redirect `log` records into it.
/// Can only be called once per process.
pub fn set_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to initalize logging")?;

    set_global_default(subscriber).context("Failed to set global subscriber")
}
