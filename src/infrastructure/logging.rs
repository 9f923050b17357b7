//! Logging system initialization
//!
//! Console tracing with env-filter control. The default filter keeps
//! dependency noise down while showing this crate's debug output; override
//! with RUST_LOG, e.g.:
//!
//! ```bash
//! # Show request internals from reqwest and hyper as well
//! RUST_LOG="debug,reqwest=debug,hyper=debug" cargo run
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system. Call once per process, before serving.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tripmaster=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
