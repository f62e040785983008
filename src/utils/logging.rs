use clap::ValueEnum;
use tracing::debug;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::settings::{LogFormat, LoggingConfig};

/// Full filter directive (`equifax_client=trace,hyper=debug`); beats both the
/// file and the command line.
pub const LOG_ENV_VAR: &str = "EQUIFAX_LOG";

// connection pool chatter drowns the client's own events below info
const QUIET_DEPENDENCIES: [&str; 3] = ["hyper_util=info", "reqwest=info", "rustls=warn"];

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
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// Resolve the effective logging config: the CLI level wins over the file.
pub fn resolve(config: Option<&LoggingConfig>, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let base = config.cloned().unwrap_or_default();
    match arg_log_level {
        Some(level) => LoggingConfig::new(level.as_str().to_owned(), base.format),
        None => base,
    }
}

pub fn run(config: Option<&LoggingConfig>, arg_log_level: Option<LogLevel>) -> bool {
    init_logging(&resolve(config, arg_log_level))
}

/// Level plus the dependency caps, unless `EQUIFAX_LOG` says otherwise.
pub fn build_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return filter;
    }
    let directives = std::iter::once(level.to_owned())
        .chain(QUIET_DEPENDENCIES.iter().map(|d| d.to_string()))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns false when one was already installed; that one stays in place.
pub fn init_logging(cfg: &LoggingConfig) -> bool {
    let registry = tracing_subscriber::registry().with(build_filter(&cfg.level));

    let installed = match cfg.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(UtcTime::rfc_3339())
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_ansi(false),
            )
            .try_init()
            .is_ok(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_timer(UtcTime::rfc_3339())
                    .with_target(false)
                    .with_ansi(true),
            )
            .try_init()
            .is_ok(),
    };

    if installed {
        debug!(level = %cfg.level, format = ?cfg.format, "logging initialized");
    }
    installed
}
