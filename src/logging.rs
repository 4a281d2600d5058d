//! Log subscriber setup for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is up
//! to the application. `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{FilaError, Result};

/// Installs a stderr `fmt` subscriber.
///
/// `verbose` raises the default level from `warn` to `debug`, which
/// includes one event per dropped message.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "fila=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| FilaError::invalid_config(format!("invalid log filter: {e}")))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| FilaError::invalid_config(format!("logging already initialized: {e}")))
}
