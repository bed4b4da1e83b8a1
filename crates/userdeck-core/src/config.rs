//! Application configuration management.
//!
//! Configuration is stored at `~/.config/userdeck/config.json` and every
//! field is optional. Environment variables (`USERDECK_BASE_URL`,
//! `USERDECK_LOCALE`, `USERDECK_TIMEOUT_SECS`) override the file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Application name used for config/log directory paths
const APP_NAME: &str = "userdeck";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const ENV_BASE_URL: &str = "USERDECK_BASE_URL";
const ENV_LOCALE: &str = "USERDECK_LOCALE";
const ENV_TIMEOUT_SECS: &str = "USERDECK_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "ru" | "russian" => Some(Locale::Ru),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    /// A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        let mut config = match Self::load_file() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = ?e, "Failed to load config, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Apply overrides from a key lookup (the process environment in practice)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(raw) = lookup(ENV_LOCALE) {
            match Locale::parse(&raw) {
                Some(locale) => self.locale = locale,
                None => warn!(value = %raw, "Ignoring unknown {}", ENV_LOCALE),
            }
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = Some(secs),
                _ => warn!(value = %raw, "Ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the log file
    pub fn log_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(r#"{"locale": "ru"}"#).expect("Failed to parse config");
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.base_url, None);

        let config = Config::parse(r#"{"base_url": "http://localhost/data", "request_timeout_secs": 5}"#)
            .expect("Failed to parse config");
        assert_eq!(config.base_url(), "http://localhost/data");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_rejects_unknown_locale() {
        assert!(Config::parse(r#"{"locale": "de"}"#).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            (ENV_BASE_URL, "http://mirror/data"),
            (ENV_LOCALE, "RU"),
            (ENV_TIMEOUT_SECS, "12"),
        ]));
        assert_eq!(config.base_url(), "http://mirror/data");
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_env_overrides_are_ignored() {
        let mut config = Config::parse(r#"{"request_timeout_secs": 3}"#).expect("Failed to parse config");
        config.apply_overrides(env(&[
            (ENV_BASE_URL, "  "),
            (ENV_LOCALE, "klingon"),
            (ENV_TIMEOUT_SECS, "0"),
        ]));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }
}
