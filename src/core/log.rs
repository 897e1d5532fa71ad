use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Events from this crate pass at debug when verbose and are silenced otherwise.
fn app_targets(verbose: bool) -> Targets {
    let level = if verbose {
        LevelFilter::from_level(Level::DEBUG)
    } else {
        LevelFilter::OFF
    };
    Targets::new().with_target(env!("CARGO_CRATE_NAME"), level)
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Logs go to stderr so quote tables on stdout can be piped.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "off" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_targets(verbose))
        .with(env_filter)
        .init();
}
