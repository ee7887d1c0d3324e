use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow `APP_LOG_LEVEL`; everything else stays at warn.
const OWN_TARGETS: [&str; 2] = ["recruit_status", "recruit_status_cli"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{directive}': unable to build EnvFilter")]
    EnvFilter {
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Expand a bare level such as `debug` into a directive scoped to this
/// workspace's crates. Anything that already names targets is used verbatim.
pub fn default_directive(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directive = String::from("warn");
    for target in OWN_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

/// Build the filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = default_directive(&config.log_level);
    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::EnvFilter { directive, source })
}

/// Install the global subscriber. Logs go to stderr so result screens on
/// stdout stay clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
