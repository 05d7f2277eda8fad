//! Tracing subscriber initialisation.
//!
//! Diagnostics go to stderr so stdout stays reserved for the scaffolder's
//! user-facing report. The filter defaults to `warn` and is overridable via
//! `RUST_LOG` (e.g. `RUST_LOG=create_vueyouse=debug` to watch each template
//! file as it is written).

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // A subscriber installed earlier (e.g. by a test harness) wins.
        }
    });
}
