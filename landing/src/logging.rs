//! Browser console logging.
//!
//! Call sites use `tracing` macros. With no tracing subscriber installed,
//! `tracing`'s `log` feature forwards every event to the `log` facade, and
//! `console_log` writes those records to the browser console.

use std::str::FromStr;

use log::Level;

/// Build-time override, e.g. `ATLAS_LOG_LEVEL=trace trunk serve`.
const LEVEL_OVERRIDE: Option<&str> = option_env!("ATLAS_LOG_LEVEL");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
}

impl LogConfig {
    /// Resolves the level from an optional override, falling back to the
    /// build profile default when the override is missing or unparsable.
    pub fn resolve(override_level: Option<&str>) -> Self {
        let level = override_level
            .and_then(|raw| Level::from_str(raw.trim()).ok())
            .unwrap_or_else(default_level);
        Self { level }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::resolve(LEVEL_OVERRIDE)
    }
}

fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Installs the console logger. Fails if a logger is already set.
pub fn init(config: &LogConfig) -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(config.level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn override_is_case_insensitive() {
        assert_eq!(LogConfig::resolve(Some("TRACE")).level, Level::Trace);
        assert_eq!(LogConfig::resolve(Some(" warn ")).level, Level::Warn);
    }

    #[test]
    fn invalid_override_falls_back() {
        assert_eq!(LogConfig::resolve(Some("loud")).level, default_level());
        assert_eq!(LogConfig::resolve(None).level, default_level());
    }

    #[test]
    fn debug_builds_default_to_debug() {
        if cfg!(debug_assertions) {
            assert_eq!(LogConfig::resolve(None).level, Level::Debug);
        } else {
            assert_eq!(LogConfig::resolve(None).level, Level::Info);
        }
    }
}
