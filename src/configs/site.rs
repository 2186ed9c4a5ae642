use std::path::Path;
use regex::Regex;
use serde::{ Deserialize, Serialize };
use url::Url;
use crate::error::ConfigError;

/// Overrides `env.CUSTOM_KEY` from the file.
pub const CUSTOM_KEY_ENV: &str = "CUSTOM_KEY";

/// Points at a replacement for the embedded `site.config.json`.
pub const SITE_CONFIG_ENV: &str = "BLUE_LION_SITE_CONFIG";

const EMBEDDED_SITE_CONFIG: &str = include_str!("../../site.config.json");

lazy_static::lazy_static! {
    // Lowercase DNS hostname: no scheme, port, path or trailing dot.
    static ref HOSTNAME: Regex = Regex::new(
        r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)*[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$"
    ).expect("hostname pattern compiles");
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub domains: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    #[serde(rename = "CUSTOM_KEY", default)]
    pub custom_key: String,
}

/// Build-time settings for the hosting tooling. The views never read these.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub env: EnvConfig,
}

impl SiteConfig {
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Resolves the config the way the app starts up: file, then environment, then checks.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(SITE_CONFIG_ENV) {
            Ok(path) => {
                log::info!("Loading site config from {}", path);
                Self::from_path(path)?
            }
            Err(_) => Self::embedded()?,
        };

        let config = config.with_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        if let Some(value) = lookup(CUSTOM_KEY_ENV) {
            log::debug!("{} overridden from the environment", CUSTOM_KEY_ENV);
            self.env.custom_key = value;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.images.domains.iter().find(|domain| !HOSTNAME.is_match(domain)) {
            Some(domain) => Err(ConfigError::InvalidImageDomain(domain.clone())),
            None => Ok(()),
        }
    }

    /// Whether an external image URL points at an allow-listed host.
    pub fn allows_image(&self, url: &str) -> bool {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Rejecting image URL {:?}: {}", url, e);
                return false;
            }
        };

        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        match url.host_str() {
            Some(host) => self.images.domains.iter().any(|domain| domain.eq_ignore_ascii_case(host)),
            None => false,
        }
    }
}
