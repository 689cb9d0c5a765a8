//! Logging setup for the `dusk` binary

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a level
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins unless `-v` was given.
pub fn init_logging(verbose: u8) {
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(Level::INFO))
    } else {
        default_filter(level_from_verbosity(verbose))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    // Dependencies stay at warn
    EnvFilter::new(format!(
        "warn,dusk_cli={level},dusk_transition={level},dusk_animation={level},\
         dusk_theme={level},dusk_paint={level}"
    ))
}
