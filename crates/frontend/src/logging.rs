//! Browser console logging

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Default filter when `FOLIO_LOG` was not set at build time
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber: formatted events go to the browser console,
/// span timings to the Performance API.
pub fn init_logging() {
    let filter = EnvFilter::try_new(option_env!("FOLIO_LOG").unwrap_or(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Browser consoles don't render ANSI colours
        .without_time() // std::time is unavailable on wasm32-unknown-unknown
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&"Logging was already initialized".into());
    }
}
