use crate::error::{Error, Result};
use crate::i18n::TRANSLATIONS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment type for configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Get environment from string
    pub fn from_str(env: &str) -> Self {
        match env.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Get environment name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "dev",
            Environment::Production => "prod",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the questionnaire is submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    #[serde(default = "default_thank_you_route")]
    pub thank_you_route: String,

    #[serde(default = "default_result_storage_key")]
    pub result_storage_key: String,

    /// Seconds to wait for the submission response, 0 waits forever
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default = "default_language")]
    pub default_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_submit_path() -> String {
    "/api/submit".to_string()
}
fn default_thank_you_route() -> String {
    "/thank-you".to_string()
}
fn default_result_storage_key() -> String {
    "paletteResult".to_string()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_language() -> String {
    "en".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
            thank_you_route: default_thank_you_route(),
            result_storage_key: default_result_storage_key(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Request timeout as a duration, `None` when unbounded
    pub fn timeout(&self) -> Option<Duration> {
        (self.request_timeout > 0).then(|| Duration::from_secs(self.request_timeout))
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration with environment-specific overrides from the working directory
    pub fn load() -> Result<Self> {
        Self::load_with_base_dir(".")
    }

    /// Load `config.toml` merged with `config.{dev,prod}.toml` from a base directory
    pub fn load_with_base_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let env = Self::detect_environment();

        let base_config_path = base_dir.join("config.toml");
        let mut merged_value = if base_config_path.exists() {
            Self::load_toml_value(&base_config_path)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };

        let env_config_path = base_dir.join(format!("config.{}.toml", env.as_str()));
        if env_config_path.exists() {
            log::debug!(
                "Loading environment-specific config from: {}",
                env_config_path.display()
            );
            let env_value = Self::load_toml_value(&env_config_path)?;

            #[cfg(feature = "config")]
            {
                merged_value = serde_toml_merge::merge(merged_value, env_value).map_err(|e| {
                    Error::config(format!("Failed to merge configuration files: {}", e))
                })?;
            }

            #[cfg(not(feature = "config"))]
            {
                let _ = env_value;
                log::warn!(
                    "Config feature not enabled, skipping environment-specific config merge"
                );
            }
        }

        let mut config: AppConfig = merged_value.try_into().map_err(|e| {
            Error::config(format!("Failed to deserialize merged configuration: {}", e))
        })?;

        config.environment = env;
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;

        log::info!(
            "Configuration loaded (environment: {}, endpoint: {}{})",
            config.environment.as_str(),
            config.client.base_url,
            config.client.submit_path
        );

        Ok(config)
    }

    /// Load configuration from a single TOML file, then apply environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path_ref.display(),
                e
            ))
        })?;

        let mut config = Self::from_toml_str(&content).map_err(|e| {
            e.with_context(format!("Invalid config file '{}'", path_ref.display()))
        })?;
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;

        log::debug!(
            "Successfully loaded configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }

    /// Parse configuration from TOML text without touching the environment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {}", e)))
    }

    fn load_toml_value<P: AsRef<Path>>(path: P) -> Result<toml::Value> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path_ref.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path_ref.display(),
                e
            ))
        })
    }

    /// Defaults plus environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = AppConfig::default();
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Detect current environment from `PALETTE_ENV`
    pub fn detect_environment() -> Environment {
        env::var("PALETTE_ENV")
            .map(|env| Environment::from_str(&env))
            .unwrap_or_default()
    }

    /// Apply `PALETTE_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("PALETTE_ENV") {
            self.environment = Environment::from_str(&env);
        }
        if let Some(base_url) = lookup("PALETTE_BASE_URL") {
            self.client.base_url = base_url;
        }
        if let Some(path) = lookup("PALETTE_SUBMIT_PATH") {
            self.client.submit_path = path;
        }
        if let Some(timeout) = lookup("PALETTE_REQUEST_TIMEOUT") {
            self.client.request_timeout = timeout
                .parse()
                .map_err(|_| Error::config("Invalid PALETTE_REQUEST_TIMEOUT value"))?;
        }
        if let Some(language) = lookup("PALETTE_LANGUAGE") {
            self.i18n.default_language = language;
        }
        if let Some(level) = lookup("PALETTE_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.client.base_url).map_err(|e| {
            Error::config(format!(
                "client.base_url '{}' is not a valid URL: {}",
                self.client.base_url, e
            ))
        })?;

        for (name, path) in [
            ("client.submit_path", &self.client.submit_path),
            ("client.thank_you_route", &self.client.thank_you_route),
        ] {
            if !path.starts_with('/') {
                return Err(Error::config(format!(
                    "{} must be an absolute path, got '{}'",
                    name, path
                )));
            }
        }

        if self.client.result_storage_key.is_empty() {
            return Err(Error::config("client.result_storage_key cannot be empty"));
        }

        if !TRANSLATIONS.has_language(&self.i18n.default_language) {
            return Err(Error::config(format!(
                "i18n.default_language '{}' has no language pack (available: {})",
                self.i18n.default_language,
                TRANSLATIONS.languages().join(", ")
            )));
        }

        if self.environment.is_production() && self.client.base_url.starts_with("http://") {
            log::warn!("Submitting over plain HTTP in production environment");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.client.submit_path, "/api/submit");
        assert_eq!(config.client.thank_you_route, "/thank-you");
        assert_eq!(config.client.result_storage_key, "paletteResult");
        assert_eq!(config.client.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.i18n.default_language, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
environment = "production"

[client]
base_url = "https://palette.example.com"
request_timeout = 0
"#,
        )
        .unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.client.base_url, "https://palette.example.com");
        assert_eq!(config.client.submit_path, "/api/submit");
        assert_eq!(config.client.timeout(), None);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PALETTE_BASE_URL", "http://localhost:9000"),
            ("PALETTE_REQUEST_TIMEOUT", "5"),
            ("PALETTE_LANGUAGE", "it"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.client.base_url, "http://localhost:9000");
        assert_eq!(config.client.request_timeout, 5);
        assert_eq!(config.i18n.default_language, "it");
    }

    #[test]
    fn test_invalid_timeout_override() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|name| {
            (name == "PALETTE_REQUEST_TIMEOUT").then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.client.submit_path = "api/submit".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.i18n.default_language = "de".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.client.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
