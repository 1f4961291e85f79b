//! tracing setup for the server binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "rusty_inbox=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` wins over the built-in filter.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    // Err only means a subscriber is already installed
    let _ = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
}
