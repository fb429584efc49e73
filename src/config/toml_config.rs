use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::{validate_one_of, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl BridgeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BridgeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BridgeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for BridgeConfig {
    fn backend_url(&self) -> Option<&str> {
        self.backend.base_url.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for BridgeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.backend.base_url {
            validate_url("backend.base_url", url)?;
        }
        validate_range("backend.timeout_seconds", self.timeout_seconds(), 1, 300)?;
        validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = BridgeConfig::from_toml_str(
            r#"
[backend]
base_url = "http://127.0.0.1:8088"
timeout_seconds = 10

[logging]
level = "debug"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.backend_url(), Some("http://127.0.0.1:8088"));
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BridgeConfig::from_toml_str("").unwrap();
        assert_eq!(config.backend_url(), None);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.log_level(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RABBIT_TEST_BACKEND", "http://pdv.local:9000");

        let config = BridgeConfig::from_toml_str(
            r#"
[backend]
base_url = "${RABBIT_TEST_BACKEND}"
"#,
        )
        .unwrap();
        assert_eq!(config.backend_url(), Some("http://pdv.local:9000"));

        std::env::remove_var("RABBIT_TEST_BACKEND");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_url = BridgeConfig::from_toml_str("[backend]\nbase_url = \"localhost\"").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_timeout = BridgeConfig::from_toml_str("[backend]\ntimeout_seconds = 0").unwrap();
        assert!(bad_timeout.validate().is_err());

        let bad_level = BridgeConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BridgeConfig::from_toml_str("[backend\nbase_url = 1").unwrap_err();
        assert!(matches!(err, BridgeError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[backend]\nbase_url = \"https://pdv.example.com\"\n")
            .unwrap();

        let config = BridgeConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend_url(), Some("https://pdv.example.com"));
    }
}
