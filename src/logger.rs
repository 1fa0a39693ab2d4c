// cs2modrewrite-rust/src/logger.rs
use crate::config::Config;
use crate::errors::{Result, RewriteError};
use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub fn setup_logging(config: &Config) -> Result<()> {
    let mut layers = Vec::new();

    // Console logger on stderr; stdout is reserved for the generated rules.
    if config.log_to_cmdline {
        let cmd_level = if config.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        let cmd_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .with_ansi(true)
            .with_span_events(FmtSpan::NONE)
            .without_time()
            .with_filter(cmd_level);
        layers.push(cmd_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| RewriteError::LoggingSetup(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}
