//! Tracing subscriber setup for applications and tests embedding the library.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{SharedError, SharedResult};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "daterange_core=info,daterange_shared=info";

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`.
///
/// Returns `Ok(false)` when a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> SharedResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| SharedError::Telemetry(e.to_string()))?,
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(default_filter, "Tracing initialised");
    }
    Ok(installed)
}
