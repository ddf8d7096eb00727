//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG`; an invalid value is reported on stderr
/// and replaced by [`DEFAULT_FILTER`].
pub fn init(json: bool) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(e) => {
            if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
                eprintln!("WARN: RUST_LOG is not a valid tracing filter ({e}); falling back to '{DEFAULT_FILTER}'");
            }
            EnvFilter::new(DEFAULT_FILTER)
        }
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
