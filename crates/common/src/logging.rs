//! Logging and tracing initialization.

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Later calls are
/// no-ops: the first installed subscriber stays (tests may race to
/// initialize).
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_reentrant() {
        init_logging(&LoggingConfig::default());
        // The second init must not panic; the first subscriber wins.
        init_logging(&LoggingConfig {
            level: "debug".to_string(),
            json: true,
        });
    }
}
