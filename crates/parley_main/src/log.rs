use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Reads `PARLEY_LOG_LEVEL`, then `RUST_LOG`. Unknown values fall back to
    /// `info`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("PARLEY_LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .and_then(|level| Self::parse(&level))
            .unwrap_or_default()
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Installs the global subscriber. An explicit level wins over the
/// environment.
pub fn init_logger(level: Option<LogLevel>) {
    let level = level.unwrap_or_else(|| LogLevel::from_lookup(|key| std::env::var(key).ok()));
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .parse_lossy("");

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
