pub use tracing::{debug, error, info, trace, warn};
use {
    crate::constants::LOG_ENV,
    tracing_subscriber::{self, fmt::format::Writer, EnvFilter},
};

const DEFAULT_FILTER: &str = "info";

struct Timer {}

impl tracing_subscriber::fmt::time::FormatTime for Timer {
    fn format_time(&self, writer: &mut Writer<'_>) -> std::fmt::Result {
        let time = chrono::Utc::now();
        writer.write_str(&format!("{}", time.format("%Y-%m-%d %H:%M:%S")))
    }
}

/// Installs a subscriber for build scripts.
///
/// Cargo captures build script stderr into the `output` file under the
/// target directory and replays it with `-vv`, so events go there. Stdout is
/// reserved for cargo directives. The filter is read from `VKDECL_LOG`.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = tracing_subscriber::fmt::format()
        .with_timer(Timer {})
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(false)
        .with_target(true)
        .compact();
    let _ = tracing_subscriber::fmt()
        .event_format(format)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
