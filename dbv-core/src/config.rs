//! Client configuration.
//!
//! Holds the API key, the target environment, and optional logging settings.
//! Configuration can be built in code or persisted as TOML; the library never
//! reads environment variables on its own.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{self, DEFAULT_LOG_LEVEL};
use crate::error::{DbvError, DbvResult};

/// Target API environment.
///
/// The two named variants resolve to fixed endpoints; `Custom` accepts any
/// base URL (useful for local mock servers).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    /// Live production API.
    #[default]
    Production,
    /// Developer sandbox API.
    Sandbox,
    /// Arbitrary base URL.
    Custom(String),
}

impl Environment {
    /// Base URL for this environment, without a trailing slash.
    pub fn base_url(&self) -> &str {
        match self {
            Environment::Production => constants::PRODUCTION_URL,
            Environment::Sandbox => constants::SANDBOX_URL,
            Environment::Custom(url) => url.trim_end_matches('/'),
        }
    }

    /// Resolve a named environment, falling back to a custom URL.
    fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "sandbox" | "test" => Environment::Sandbox,
            _ => Environment::Custom(trimmed.to_string()),
        }
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Production => "production".into(),
            Environment::Sandbox => "sandbox".into(),
            Environment::Custom(url) => url,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_url())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API connection configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token issued by the platform. Treated as an opaque secret.
    #[serde(default)]
    pub api_key: String,

    /// Target environment.
    #[serde(default)]
    pub environment: Environment,

    /// Optional request timeout in milliseconds. Unset means the HTTP
    /// transport's own defaults apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl ApiConfig {
    /// Create a configuration for the given key and environment.
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
            timeout_ms: None,
        }
    }

    /// Set a request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Check that the configuration can be used to build a client.
    pub fn validate(&self) -> DbvResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(DbvError::MissingConfig("api_key".into()));
        }
        if self.environment.base_url().is_empty() {
            return Err(DbvError::MissingConfig("environment".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. Empty means console-only logging.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}

impl AppConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> DbvResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> DbvResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> DbvResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Validate the sections needed to build a client.
    pub fn validate(&self) -> DbvResult<()> {
        self.api.validate()
    }
}
