//! Tracing subscriber setup for the binary.
//!
//! The library only emits `tracing` events (and `log` records from the config
//! loader); installing a subscriber is left to `main`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a filter directive, e.g.
/// `SEOAUDIT_LOG=seoaudit::rules=debug`.
pub const LOG_ENV: &str = "SEOAUDIT_LOG";

static INIT: Once = Once::new();

/// Default directive for a `-v` count when `SEOAUDIT_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "seoaudit=warn",
        1 => "seoaudit=info",
        2 => "seoaudit=debug",
        _ => "seoaudit=trace",
    }
}

/// Install the global subscriber, writing to stderr. Idempotent.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbosity >= 2),
            )
            .with(filter)
            .init();
    });
}
