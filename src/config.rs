//! Application configuration
//!
//! Built from defaults, then an optional TOML file, then CLI/environment
//! overrides.

use crate::error::{QkartError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8082/api/v1";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_TOASTS: usize = 3;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backend, without trailing slash
    pub endpoint: String,
    /// Quiet period before a search is sent
    pub debounce: Duration,
    /// How long a notification stays on screen
    pub toast_duration: Duration,
    /// Maximum notifications visible at once
    pub max_toasts: usize,
    /// Optional per-request timeout. `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            toast_duration: DEFAULT_TOAST_DURATION,
            max_toasts: DEFAULT_MAX_TOASTS,
            request_timeout: None,
        }
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    debounce_ms: Option<u64>,
    toast_secs: Option<u64>,
    max_toasts: Option<usize>,
    request_timeout_secs: Option<u64>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub debounce_ms: Option<u64>,
}

impl Config {
    /// Load configuration, applying the file (if any) and then `overrides`.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(endpoint) = &overrides.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(ms) = overrides.debounce_ms {
            config.debounce = Duration::from_millis(ms);
        }

        config.endpoint = normalize_endpoint(&config.endpoint)?;
        Ok(config)
    }

    /// Parse a TOML config file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(text)?;
        let mut config = Self::default();

        if let Some(endpoint) = file.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(ms) = file.debounce_ms {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(secs) = file.toast_secs {
            config.toast_duration = Duration::from_secs(secs);
        }
        if let Some(max) = file.max_toasts {
            if max == 0 {
                return Err(QkartError::Config("max_toasts must be at least 1".into()));
            }
            config.max_toasts = max;
        }
        config.request_timeout = file.request_timeout_secs.map(Duration::from_secs);

        config.endpoint = normalize_endpoint(&config.endpoint)?;
        Ok(config)
    }
}

/// Validate the endpoint scheme and strip trailing slashes so paths can be
/// appended with a single `/`.
fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(QkartError::Config(format!(
            "endpoint must start with http:// or https://, got '{}'",
            endpoint
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_storefront_behaviour() {
        let config = Config::default();
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn file_values_apply_and_trailing_slash_is_trimmed() {
        let config = Config::from_toml(
            r#"
            endpoint = "https://qkart.example.com/api/v1/"
            debounce_ms = 250
            toast_secs = 2
            request_timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://qkart.example.com/api/v1");
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.toast_duration, Duration::from_secs(2));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://file-host:8082/api/v1\"").unwrap();

        let overrides = Overrides {
            endpoint: Some("http://cli-host:9000/api/v1".into()),
            debounce_ms: Some(100),
        };
        let config = Config::load(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.endpoint, "http://cli-host:9000/api/v1");
        assert_eq!(config.debounce, Duration::from_millis(100));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let overrides = Overrides {
            endpoint: Some("ftp://example.com".into()),
            debounce_ms: None,
        };
        assert!(matches!(
            Config::load(None, &overrides),
            Err(QkartError::Config(_))
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml("endpont = \"http://x\""),
            Err(QkartError::Toml(_))
        ));
    }

    #[test]
    fn rejects_zero_toasts() {
        assert!(matches!(
            Config::from_toml("max_toasts = 0"),
            Err(QkartError::Config(_))
        ));
    }
}
