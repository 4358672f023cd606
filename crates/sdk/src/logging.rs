//! Structured logging setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tradeline_domain::{LoggingConfig, Result, TradelineError};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Output is JSON lines when
/// `config.json` is set, human-readable otherwise.
///
/// # Errors
///
/// Returns [`TradelineError::Config`] if the level directive is invalid or a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed.map_err(|e| TradelineError::Config(format!("Failed to install logger: {e}")))
}

/// Filter from `RUST_LOG`, falling back to the configured directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        TradelineError::Config(format!("Invalid log level '{}': {e}", config.level))
    })
}
