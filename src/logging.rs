// Logging setup - one global tracing subscriber

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "student_records=info";

static INIT_ONCE: Once = Once::new();

/// Install the stderr subscriber. Later calls are no-ops.
///
/// When `only_if_requested` is set, nothing is installed unless `RUST_LOG`
/// is present (keeps the TUI's alternate screen clean).
pub fn init(only_if_requested: bool) {
    if only_if_requested && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    INIT_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
            )
            .init();
    });
}
