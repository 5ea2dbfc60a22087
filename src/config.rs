//! Configuration loading for discover-tui.
//!
//! The config file is TOML, located via `--config <path>` or the
//! `DISCOVER_TUI_CONFIG` environment variable.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Page sizes the table accepts.
pub const ALLOWED_PAGE_SIZES: [u64; 3] = [10, 25, 50];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub tick_interval_ms: u64,
    pub default_page_size: u64,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or DISCOVER_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if !ALLOWED_PAGE_SIZES.contains(&self.default_page_size) {
            return Err(ConfigError::InvalidValue {
                field: "default_page_size",
                reason: "must be one of 10, 25, 50".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("DISCOVER_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn base_config() -> TuiConfig {
        TuiConfig {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 5_000,
            tick_interval_ms: 200,
            default_page_size: 10,
            auth: AuthConfig::default(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_base_url_rejected() {
        let mut config = base_config();
        config.api_base_url = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = base_config();
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn page_size_must_be_in_closed_set() {
        for size in [10, 25, 50] {
            let mut config = base_config();
            config.default_page_size = size;
            assert!(config.validate().is_ok());
        }
        for size in [0, 1, 20, 100] {
            let mut config = base_config();
            config.default_page_size = size;
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_base_url = "http://example.test"
request_timeout_ms = 3000
tick_interval_ms = 250
default_page_size = 25

[auth]
api_key = "k"
"#
        )
        .unwrap();
        let config = TuiConfig::from_path(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://example.test");
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.auth.api_key.as_deref(), Some("k"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<TuiConfig, _> = toml::from_str(
            r#"
api_base_url = "http://example.test"
request_timeout_ms = 3000
tick_interval_ms = 250
default_page_size = 10
grpc_endpoint = "left over"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn auth_section_is_optional() {
        let config: TuiConfig = toml::from_str(
            r#"
api_base_url = "http://example.test"
request_timeout_ms = 3000
tick_interval_ms = 250
default_page_size = 10
"#,
        )
        .unwrap();
        assert!(config.auth.api_key.is_none());
    }
}
