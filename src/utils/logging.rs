use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::settings::{LogFormat, LoggingConfig};
use crate::utils::constants::DEFAULT_LOG_LEVEL;


#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "TRACE",
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARN => "WARN",
            LogLevel::ERROR => "ERROR",
        }
    }
}


/// Build the logging config from command-line values, falling back to `LOG_FORMAT`
/// and the default level.
pub fn run(arg_log_level: Option<LogLevel>, arg_log_format: Option<LogFormat>) {
    let logging_config = LoggingConfig::new(
        arg_log_level
            .map(|level| level.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
        arg_log_format.unwrap_or_else(LogFormat::from_env),
    );

    init_logging(&logging_config);
}


/// Initialize tracing with the desired config.
///
/// Everything goes to stderr: stdout carries the token.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    // Base layer: filter + writer
    let registry = tracing_subscriber::registry().with(env_filter);

    // Choose format layer
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
    };
}
