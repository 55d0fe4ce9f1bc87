use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global tracing subscriber. `RUST_LOG` wins over `LOG_LEVEL`.
pub fn init(config: &Config) {
    let (env_filter, fallback_warning) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => level_filter(&config.log_level),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    if let Some(message) = fallback_warning {
        warn!("{}", message);
    }
}

/// Parse `LOG_LEVEL`, falling back to `info`. The second element carries the
/// warning to log once the subscriber is installed.
fn level_filter(log_level: &str) -> (EnvFilter, Option<String>) {
    match log_level.parse::<EnvFilter>() {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new("info"),
            Some(format!(
                "LOG_LEVEL='{}' is not a valid tracing filter ({}); falling back to 'info'",
                log_level, e
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_level_has_no_warning() {
        let (_, warning) = level_filter("debug,tower_http=warn");
        assert!(warning.is_none());
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        let (_, warning) = level_filter("session_log=loud");
        let warning = warning.unwrap();
        assert!(warning.contains("LOG_LEVEL='session_log=loud'"));
        assert!(warning.contains("falling back to 'info'"));
    }
}
