//! Tracing subscriber setup shared by shells.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; defaults to info-level output for this
/// crate. Call once at startup; a second call panics because the global
/// subscriber is already set.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
