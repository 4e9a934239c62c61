use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber; `log` records from the library crates are
/// forwarded to it.
///
/// `RUST_LOG` sets the filter (default `info`), `CROWDIN_LOG_FORMAT=json`
/// switches to JSON lines.
pub fn init_tracing() {
    let log_format = std::env::var("CROWDIN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}
