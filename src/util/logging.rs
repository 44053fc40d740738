// DeviceDiag - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets RUST_LOG=debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Stdout is reserved for --print / --json output.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive for the subscriber.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
fn select_filter(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if env_set {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = select_filter(
        std::env::var("RUST_LOG").is_ok(),
        debug_flag,
        config_level,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_beats_config_level() {
        let filter = select_filter(false, true, Some("warn"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_config_level_used_without_flag() {
        let filter = select_filter(false, false, Some("trace"));
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    fn test_default_level() {
        let filter = select_filter(false, false, None);
        assert_eq!(filter.to_string(), "info");
    }
}
