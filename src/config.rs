use anyhow::{Context, Result, bail};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Default location of the forecasting service.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Prefix of environment variables overriding configuration keys,
/// e.g. `MEDFORECAST_API_BASE_URL`.
pub const ENV_PREFIX: &str = "MEDFORECAST";

/// Configuration of the forecasting service client
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Base URL all endpoint paths are appended to
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    /// Load configuration: defaults, then `medforecast.toml` (or the given
    /// file, which must then exist), then `MEDFORECAST_*` environment
    /// variables. A `.env` file is loaded into the environment first.
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file = match config_file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("medforecast").required(false),
        };

        let builder = Self::defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX));

        Self::from_builder(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", 30)?)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: ServiceConfig = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validated()
    }

    /// Replace the base URL, e.g. from a command line flag.
    pub fn with_api_base_url(self, api_base_url: impl Into<String>) -> Result<Self> {
        Self {
            api_base_url: api_base_url.into(),
            ..self
        }
        .validated()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validated(mut self) -> Result<Self> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("api_base_url must not be empty");
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            bail!("api_base_url must start with http:// or https://, got '{}'", trimmed);
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_builder(ServiceConfig::defaults().unwrap()).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            api_base_url = "https://forecast.example.org/api/"
            request_timeout_secs = 5
        "#;
        let builder = ServiceConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));
        let config = ServiceConfig::from_builder(builder).unwrap();

        assert_eq!(config.api_base_url, "https://forecast.example.org/api");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let builder = ServiceConfig::defaults()
            .unwrap()
            .set_override("api_base_url", "forecast.local")
            .unwrap();
        assert!(ServiceConfig::from_builder(builder).is_err());

        let builder = ServiceConfig::defaults()
            .unwrap()
            .set_override("request_timeout_secs", 0)
            .unwrap();
        assert!(ServiceConfig::from_builder(builder).is_err());
    }

    #[test]
    fn test_flag_override() {
        let config = ServiceConfig::from_builder(ServiceConfig::defaults().unwrap())
            .unwrap()
            .with_api_base_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");

        let config = ServiceConfig::from_builder(ServiceConfig::defaults().unwrap()).unwrap();
        assert!(config.with_api_base_url("  ").is_err());
    }
}
