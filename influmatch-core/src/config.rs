use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::error::ConfigError;
use crate::locale::Locale;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "influmatch=info,influmatch_core=info,match_client=info,gui=info";
pub const DEFAULT_CONFIG_FILE: &str = "influmatch.toml";

pub const ENV_CONFIG_PATH: &str = "INFLUMATCH_CONFIG";
pub const ENV_API_URL: &str = "INFLUMATCH_API_URL";
pub const ENV_LOCALE: &str = "INFLUMATCH_LOCALE";
pub const ENV_LOG: &str = "INFLUMATCH_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub locale: Locale,
    pub log_filter: String,
    pub user_agent: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base_url: Option<String>,
    locale: Option<Locale>,
    log_filter: Option<String>,
    user_agent: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: Locale::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            user_agent: format!("influmatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Defaults, then the TOML file, then the process environment (after `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let explicit = std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from);
        let file = match explicit {
            Some(path) => Some(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.exists().then_some(fallback)
            }
        };

        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(file: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = file {
            let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ConfigError::FileNotFound {
                    path: path.display().to_string(),
                },
                _ => ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                },
            })?;
            config.merge_file(toml::from_str(&contents)?);
            info!("Loaded configuration from {}", path.display());
        }

        if let Some(url) = env(ENV_API_URL) {
            config.api_base_url = url;
        }
        if let Some(locale) = env(ENV_LOCALE) {
            config.locale = locale.parse()?;
        }
        if let Some(filter) = env(ENV_LOG) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    fn merge_file(&mut self, file: FileConfig) {
        if let Some(url) = file.api_base_url {
            self.api_base_url = url;
        }
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        if let Some(agent) = file.user_agent {
            self.user_agent = agent;
        }
    }

    fn validate(&mut self) -> Result<(), ConfigError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
            field: "api_base_url".to_string(),
            value: format!("{trimmed} ({e})"),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationFailed {
                reason: format!("api_base_url must use http or https, got {}", parsed.scheme()),
            });
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::ValidationFailed {
                reason: "api_base_url has no host".to_string(),
            });
        }

        self.api_base_url = trimmed.to_string();

        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
        Ok(())
    }
}
