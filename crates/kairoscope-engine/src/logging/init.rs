use std::sync::Once;

use log::LevelFilter;

/// Environment variable consulted when no explicit filter is configured.
pub const ENV_FILTER_VAR: &str = "RUST_LOG";

/// Logger configuration.
///
/// `filter` uses the `env_logger` directive syntax, e.g.
/// `"kairoscope_app=debug,kairoscope_engine=trace"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    /// Level used when neither `filter` nor [`ENV_FILTER_VAR`] is set.
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), ..Self::default() }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSource {
    Config(String),
    Environment(String),
    Fallback(LevelFilter),
}

/// Picks the filter: explicit config, then the environment value, then the
/// fallback level. Blank directives count as unset.
pub fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> FilterSource {
    let non_blank = |s: &String| !s.trim().is_empty();

    if let Some(filter) = config.filter.clone().filter(non_blank) {
        FilterSource::Config(filter)
    } else if let Some(filter) = env.filter(non_blank) {
        FilterSource::Environment(filter)
    } else {
        FilterSource::Fallback(config.fallback_level)
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once; later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let source = resolve_filter(&config, std::env::var(ENV_FILTER_VAR).ok());

        let mut builder = env_logger::Builder::new();
        match &source {
            FilterSource::Config(f) | FilterSource::Environment(f) => {
                builder.parse_filters(f);
            }
            FilterSource::Fallback(level) => {
                builder.filter_level(*level);
            }
        }
        builder.write_style(config.write_style);

        // A test harness may already own the global logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized ({source:?})");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_environment() {
        let config = LoggingConfig::with_filter("kairoscope_app=trace");
        assert_eq!(
            resolve_filter(&config, Some("warn".into())),
            FilterSource::Config("kairoscope_app=trace".into())
        );
    }

    #[test]
    fn environment_used_without_explicit_filter() {
        assert_eq!(
            resolve_filter(&LoggingConfig::default(), Some("debug".into())),
            FilterSource::Environment("debug".into())
        );
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(
            resolve_filter(&LoggingConfig::default(), None),
            FilterSource::Fallback(LevelFilter::Info)
        );
    }

    #[test]
    fn blank_values_are_skipped() {
        let config = LoggingConfig::with_filter("  ");
        assert_eq!(
            resolve_filter(&config, Some("".into())),
            FilterSource::Fallback(LevelFilter::Info)
        );
        assert_eq!(
            resolve_filter(&config, Some("error".into())),
            FilterSource::Environment("error".into())
        );
    }

    #[test]
    fn fallback_level_is_configurable() {
        let config = LoggingConfig {
            fallback_level: LevelFilter::Warn,
            ..LoggingConfig::default()
        };
        assert_eq!(resolve_filter(&config, None), FilterSource::Fallback(LevelFilter::Warn));
    }
}
