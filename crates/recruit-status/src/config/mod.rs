use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub roster: RosterConfig,
    pub search: SearchConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("APP_ROSTER_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let passing_marker =
            env::var("APP_PASSING_MARKER").unwrap_or_else(|_| DEFAULT_PASSING_MARKER.to_string());
        if passing_marker.is_empty() {
            return Err(ConfigError::EmptyPassingMarker);
        }

        let delay = duration_var("APP_SEARCH_DELAY_MS", DEFAULT_SEARCH_DELAY_MS)?;
        let tick = duration_var("APP_PROGRESS_TICK_MS", DEFAULT_PROGRESS_TICK_MS)?;
        if tick.is_zero() {
            return Err(ConfigError::InvalidDuration {
                variable: "APP_PROGRESS_TICK_MS",
                value: "0".to_string(),
            });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            roster: RosterConfig {
                path,
                passing_marker,
            },
            search: SearchConfig { delay, tick },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

pub const DEFAULT_PASSING_MARKER: &str = "lulus";
const DEFAULT_SEARCH_DELAY_MS: u64 = 1800;
const DEFAULT_PROGRESS_TICK_MS: u64 = 200;

fn duration_var(variable: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDuration {
                variable,
                value: raw,
            }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

/// Where the roster comes from and how its status column is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// `None` selects the roster embedded in the crate.
    pub path: Option<PathBuf>,
    pub passing_marker: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: None,
            passing_marker: DEFAULT_PASSING_MARKER.to_string(),
        }
    }
}

/// Timing of the simulated search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub delay: Duration,
    pub tick: Duration,
}

impl SearchConfig {
    /// Resolve immediately; used by `--instant` and most tests.
    pub const fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
            tick: Duration::from_millis(DEFAULT_PROGRESS_TICK_MS),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
            tick: Duration::from_millis(DEFAULT_PROGRESS_TICK_MS),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDuration {
        variable: &'static str,
        value: String,
    },
    EmptyPassingMarker,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDuration { variable, value } => write!(
                f,
                "{variable} must be a positive number of milliseconds (got '{value}')"
            ),
            ConfigError::EmptyPassingMarker => write!(f, "APP_PASSING_MARKER must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_ROSTER_PATH");
        env::remove_var("APP_PASSING_MARKER");
        env::remove_var("APP_SEARCH_DELAY_MS");
        env::remove_var("APP_PROGRESS_TICK_MS");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.roster, RosterConfig::default());
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.search.delay, Duration::from_millis(1800));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_ROSTER_PATH", "/srv/roster.csv");
        env::set_var("APP_PASSING_MARKER", "passed");
        env::set_var("APP_SEARCH_DELAY_MS", " 250 ");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.roster.path, Some(PathBuf::from("/srv/roster.csv")));
        assert_eq!(config.roster.passing_marker, "passed");
        assert_eq!(config.search.delay, Duration::from_millis(250));
        assert_eq!(config.search.tick, Duration::from_millis(200));
    }

    #[test]
    fn rejects_non_numeric_delay() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEARCH_DELAY_MS", "soon");
        let err = AppConfig::load().expect_err("delay must be numeric");
        reset_env();

        assert!(matches!(
            err,
            ConfigError::InvalidDuration {
                variable: "APP_SEARCH_DELAY_MS",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_tick_and_empty_marker() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PROGRESS_TICK_MS", "0");
        assert!(AppConfig::load().is_err());

        reset_env();
        env::set_var("APP_PASSING_MARKER", "");
        let err = AppConfig::load().expect_err("marker must be present");
        reset_env();
        assert!(matches!(err, ConfigError::EmptyPassingMarker));
    }
}
