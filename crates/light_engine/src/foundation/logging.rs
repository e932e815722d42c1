//! Logging utilities and structured logging support

use log::LevelFilter;

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `level` is the default filter (`"error"`, `"warn"`, `"info"`, `"debug"`,
/// `"trace"` or `"off"`). `RUST_LOG` still takes precedence when set.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: &str) {
    let filter = parse_level(level);

    let result = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init();

    if result.is_ok() && filter == LevelFilter::Info && !level.trim().eq_ignore_ascii_case("info") {
        log::warn!("Unknown log level '{}', using 'info'", level);
    }
}

/// Parse a log level name, falling back to `Info` for unknown names
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
