//! Logging setup
//!
//! The library only emits `tracing` events. Hosts that want them on
//! stderr call [`init_logger`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::models::errors::{TravelError, TravelResult};

/// Install a compact fmt subscriber. `RUST_LOG` overrides the default
/// filter. Fails if a global subscriber is already set.
pub fn init_logger(verbose: bool) -> TravelResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| TravelError::Config {
            field: "logging".to_string(),
            message: e.to_string(),
        })
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "intergalactic_travel=debug"
    } else {
        "intergalactic_travel=info"
    }
}
