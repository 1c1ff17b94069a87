use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps a user-supplied level to an `EnvFilter` directive, defaulting to `info`.
pub fn filter_directive(log_level: &str) -> String {
    match log_level.trim().to_lowercase().as_str() {
        "" => "info".to_string(),
        "warning" => "warn".to_string(),
        other => other.to_string(),
    }
}

/// Installs the global `tracing` subscriber. Output goes to stderr so it
/// never mixes with rendered tables on stdout.
pub fn setup_logging(log_level: &str) {
    let filter =
        EnvFilter::try_new(filter_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second initialisation (e.g. in tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_normalises_levels() {
        assert_eq!(filter_directive("WARNING"), "warn");
        assert_eq!(filter_directive(" Debug "), "debug");
        assert_eq!(filter_directive(""), "info");
        assert_eq!(filter_directive("lol_stats=trace"), "lol_stats=trace");
    }

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        setup_logging("info");
        setup_logging("debug");
    }
}
