//! Tracing subscriber setup for hosts embedding the editor.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `debug` when `verbose` is set, `info` otherwise. Returns
/// `false` if a global subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
