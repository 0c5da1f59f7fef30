/// Tracing subscriber setup
///
/// `RUST_LOG` overrides the default filter. `LOG_FORMAT=json` switches the
/// fmt layer to one JSON object per event.

use crate::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "notekeep_api=debug,notekeep_shared=debug,tower_http=debug";

/// Installs the global tracing subscriber
///
/// Must be called once, before the first span or event is recorded.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}
