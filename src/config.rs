//! Runtime configuration read from environment variables

use std::time::Duration;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_LOG_FILTER, ENV_API_URL, ENV_LOG, ENV_UPDATE_DELAY_MS,
    REQUEST_DEMO_DELAY,
};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Delay applied before each message update request
    pub update_delay: Duration,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(DEFAULT_API_URL),
            update_delay: REQUEST_DEMO_DELAY,
            log_filter: String::from(DEFAULT_LOG_FILTER),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = non_empty(lookup(ENV_API_URL)) {
            config.api_url = parse_api_url(&url)?;
        }

        if let Some(delay) = non_empty(lookup(ENV_UPDATE_DELAY_MS)) {
            let ms = delay
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDelay {
                    var: ENV_UPDATE_DELAY_MS,
                    value: delay.clone(),
                })?;
            config.update_delay = Duration::from_millis(ms);
        }

        if let Some(filter) = non_empty(lookup(ENV_LOG)) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            var: ENV_API_URL,
            value: raw.to_string(),
        });
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.update_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://screens.local/"),
            (ENV_UPDATE_DELAY_MS, "250"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://screens.local");
        assert_eq!(config.update_delay, Duration::from_millis(250));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = Config::from_lookup(lookup_from(&[(ENV_API_URL, "ftp://nope")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_bad_delay() {
        let err =
            Config::from_lookup(lookup_from(&[(ENV_UPDATE_DELAY_MS, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDelay {
                var: ENV_UPDATE_DELAY_MS,
                value: "soon".into()
            }
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[(ENV_API_URL, "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
