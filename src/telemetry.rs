//! Tracing subscriber setup for the surrounding process.
//!
//! The core only emits `tracing` events; installing a subscriber is the
//! bootstrap's job. `init` is safe to call more than once.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber from `RUST_LOG` (default `info`).
pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .try_init();
}
