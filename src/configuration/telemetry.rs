use once_cell::sync::Lazy;
use tracing::subscriber::set_global_default;
use tracing_forest::ForestLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

static TRACING: Lazy<()> = Lazy::new(setup_global_subscriber);

fn setup_global_subscriber() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(ForestLayer::default());
    if let Err(e) = set_global_default(subscriber) {
        eprintln!("failed to set global tracing subscriber: {e}");
    }
}

/// Installs the global subscriber, filtered by `RUST_LOG` and defaulting to `info`.
///
/// Safe to call more than once, only the first call has an effect.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
