//! Logging setup shared by the binaries
//!
//! Log output goes to stderr so stdout only carries the documents and the
//! validation report.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(log_level: &str) -> String {
    if log_level == "trace" {
        format!("channel_catalog={log_level},reqwest=debug")
    } else {
        format!("channel_catalog={log_level}")
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
