//! # Configuration
//!
//! Layered service configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. a TOML file (`config/default.toml` if present, or an explicit path)
//! 3. environment variables prefixed `BASKET__`, sections separated by `__`
//!    (`BASKET__SERVER__PORT=9090`)
//!
//! # Examples
//!
//! ```no_run
//! use smart_basket::config::AppConfig;
//!
//! let config = AppConfig::load(None).unwrap();
//! println!("listening on {}", config.server.address());
//! ```

use crate::application::error::InfrastructureError;
use crate::application::services::DEFAULT_SNAPSHOT_TIMEOUT_MS;
use crate::domain::value_objects::{Currency, DEFAULT_CURRENCY_CODE};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file, looked up relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BASKET";

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns `host:port`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Comparison settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Currency assumed for listings that state none.
    pub default_currency: String,
    /// Deadline for loading a price snapshot.
    pub snapshot_timeout_ms: u64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY_CODE.to_string(),
            snapshot_timeout_ms: DEFAULT_SNAPSHOT_TIMEOUT_MS,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable multi-line output.
    #[default]
    Pretty,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Price snapshot source settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// JSON seed file; the store starts empty when unset.
    pub path: Option<PathBuf>,
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server.
    pub server: ServerConfig,
    /// Comparison engine.
    pub comparison: ComparisonConfig,
    /// Logging.
    pub logging: LoggingConfig,
    /// Snapshot source.
    pub snapshot: SnapshotConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, file and environment.
    ///
    /// With `path` set the file must exist; otherwise
    /// `config/default.toml` is read when present.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a source cannot be
    /// read or the merged result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, InfrastructureError> {
        Self::load_with_env(
            path,
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, InfrastructureError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| InfrastructureError::configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` describing the first
    /// invalid setting.
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        if self.server.port == 0 {
            return Err(InfrastructureError::configuration(
                "server.port must be non-zero",
            ));
        }
        if self.comparison.snapshot_timeout_ms == 0 {
            return Err(InfrastructureError::configuration(
                "comparison.snapshot_timeout_ms must be non-zero",
            ));
        }
        self.default_currency()?;
        Ok(())
    }

    /// Returns the configured default currency.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if the code is not a
    /// valid currency code.
    pub fn default_currency(&self) -> Result<Currency, InfrastructureError> {
        Currency::new(&self.comparison.default_currency).map_err(|e| {
            InfrastructureError::configuration(format!("comparison.default_currency: {e}"))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.comparison.snapshot_timeout_ms, 5000);
        assert_eq!(config.default_currency().unwrap().code(), "JOD");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.snapshot.path.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n\n[snapshot]\npath = \"data/snapshot.json\"\n",
        )
        .unwrap();

        let config = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.snapshot.path.as_deref(),
            Some(Path::new("data/snapshot.json"))
        );
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = AppConfig::load_with_env(
            Some(&path),
            env(&[
                ("BASKET__SERVER__PORT", "9100"),
                ("BASKET__COMPARISON__DEFAULT_CURRENCY", "usd"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.default_currency().unwrap().code(), "USD");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = AppConfig::load_with_env(Some(Path::new("/no/such/file.toml")), env(&[]))
            .unwrap_err();
        assert!(matches!(err, InfrastructureError::Configuration(_)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.comparison.snapshot_timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("snapshot_timeout_ms"));
    }

    #[test]
    fn bad_currency_is_rejected() {
        let mut config = AppConfig::default();
        config.comparison.default_currency = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
