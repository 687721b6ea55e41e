//! Structured logging setup
//!
//! `RUST_LOG` takes precedence over the configured level:
//! ```bash
//! RUST_LOG=calc_strategy=debug calc-harness run --strategy sealed_class
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Safe to call multiple times (only first call takes effect).
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_level)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
