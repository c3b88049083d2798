//! Tracing subscriber setup shared by the server and client binaries.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the given binary name is
/// filtered at `default_level`. Binary names use hyphens while tracing
/// targets use underscores, so the name is normalized before filtering.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary (e.g. `env!("CARGO_BIN_NAME")`)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. "debug")
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let target = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{target}={default_level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::debug!("logger initialized for {target}");
}
