//! Logging setup for applications embedding the engine.
//!
//! The library itself only emits `tracing` events (rejected operands,
//! malformed planes, entropy-seeded generators); installing a subscriber is
//! left to the application. `init_logging` is a one-call default.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "hypertrit=info";

/// Install a fmt subscriber filtered by `RUST_LOG` (falling back to
/// [`DEFAULT_FILTER`]).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
