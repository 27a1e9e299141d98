#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name such as `debug`, falling back to `default`.
pub fn parse_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment
/// variable. Defaults to `default` if the variable is not set or invalid.
/// Records go to stderr so they never mix with the boards on stdout.
pub fn init_logging(default: LevelFilter) {
    let var = env::var(LOG_ENV_VAR).ok();
    let level = parse_level(var.as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level(Some("DEBUG"), LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(parse_level(Some("off"), LevelFilter::Warn), LevelFilter::Off);
    }

    #[test]
    fn invalid_level_falls_back() {
        assert_eq!(parse_level(Some("loud"), LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(parse_level(None, LevelFilter::Info), LevelFilter::Info);
    }
}
