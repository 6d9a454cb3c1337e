//! Build-time application configuration.
//!
//! A static WASM bundle has no process environment once it is served, so
//! settings are captured with `option_env!` when the bundle is compiled:
//!
//! - `BRIGHT_API_BASE`: backend origin (default `http://localhost:3000`;
//!   empty means same origin)
//! - `BRIGHT_LOG_LEVEL`: `error|warn|info|debug|trace` (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Error returned when a build-time setting cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BRIGHT_LOG_LEVEL '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Resolve config from the variables captured at compile time.
    ///
    /// An invalid log level falls back to [`DEFAULT_LOG_LEVEL`] and is
    /// returned alongside so start-up can report it; the API base is kept.
    pub fn from_build_env() -> (Self, Option<ConfigError>) {
        Self::with_fallback(option_env!("BRIGHT_API_BASE"), option_env!("BRIGHT_LOG_LEVEL"))
    }

    /// Build config from raw optional values, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unknown log level.
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { api_base: parse_api_base(api_base), log_level: parse_log_level(log_level)? })
    }

    /// Like [`Self::from_values`], but a bad log level only replaces the
    /// level with the default.
    pub fn with_fallback(api_base: Option<&str>, log_level: Option<&str>) -> (Self, Option<ConfigError>) {
        let (log_level, error) = match parse_log_level(log_level) {
            Ok(level) => (level, None),
            Err(e) => (DEFAULT_LOG_LEVEL, Some(e)),
        };
        (Self { api_base: parse_api_base(api_base), log_level }, error)
    }

    /// Absolute URL for an API path such as `/api/campaign`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Resolve a backend-relative upload path (e.g. a campaign image).
    /// Absolute URLs pass through unchanged.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else {
            self.endpoint(path)
        }
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.unwrap_or(DEFAULT_API_BASE).trim().trim_end_matches('/').to_owned()
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(raw) => raw.parse::<log::Level>().map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned())),
    }
}

/// Process-wide config, resolved once on first use.
///
/// Start-up reports an invalid log level once the logger is installed.
pub fn app_config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| AppConfig::from_build_env().0)
}
