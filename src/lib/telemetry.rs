//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! without timestamps and written to the browser console through
//! `tracing-web`, which maps each event level to the matching console method.
//! Filtering follows the configured log level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps a configured level name to a tracing level, falling back to `INFO`.
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Builds the event filter for the configured level.
pub fn env_filter(value: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(parse_level(value).into())
        .parse_lossy("")
}

/// Installs the console subscriber. Calling it twice keeps the first one.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let console = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(console)
        .with(env_filter(level))
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::{env_filter, parse_level};
    use tracing::Level;

    #[test]
    fn parse_level_accepts_known_names() {
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("trace"), Level::TRACE);
    }

    #[test]
    fn parse_level_defaults_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn env_filter_uses_the_configured_level_as_default() {
        assert_eq!(env_filter("debug").to_string(), "debug");
        assert_eq!(env_filter("nonsense").to_string(), "info");
    }
}
