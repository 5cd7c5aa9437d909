//! Environment configuration.
//!
//! Populated once at process start and passed explicitly to the navigation
//! facade. Sources are layered, later wins: built-in defaults, then a YAML
//! file, then `PAGEWRIGHT_*` environment variables.

use crate::locator::{LocatorOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use crate::result::{PagewrightError, PagewrightResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default site under test
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pagewright.yaml";

/// Username accepted by the demo storefront
pub const STANDARD_USER: &str = "standard_user";

/// Password shared by all demo storefront accounts
pub const STANDARD_PASSWORD: &str = "secret_sauce";

/// A username/password pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create a credentials pair
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(STANDARD_USER, STANDARD_PASSWORD)
    }
}

/// How to launch the browser for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Run in headless mode
    pub headless: bool,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            viewport_width: 1280,
            viewport_height: 800,
            chromium_path: None,
        }
    }
}

/// Process-wide test environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Absolute base URL of the site under test
    pub base_url: String,
    /// Credentials used by tests that need a logged-in user
    pub credentials: Credentials,
    /// Browser launch settings
    pub browser: BrowserSettings,
    /// Element wait window
    pub element_timeout_ms: u64,
    /// Element polling interval
    pub poll_interval_ms: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            browser: BrowserSettings::default(),
            element_timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl EnvironmentConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set element timeout
    #[must_use]
    pub const fn with_element_timeout(mut self, timeout_ms: u64) -> Self {
        self.element_timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Parse a YAML document; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> PagewrightResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read a YAML file
    pub fn from_file(path: &Path) -> PagewrightResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> PagewrightResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Load the layered configuration.
    ///
    /// With `path = None` the default file is used if present. An explicit
    /// path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> PagewrightResult<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        let config = base.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        tracing::debug!(base_url = %config.base_url, "configuration loaded");
        Ok(config)
    }

    /// Overlay `PAGEWRIGHT_*` variables read through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> PagewrightResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PAGEWRIGHT_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = lookup("PAGEWRIGHT_USERNAME") {
            self.credentials.username = v;
        }
        if let Some(v) = lookup("PAGEWRIGHT_PASSWORD") {
            self.credentials.password = v;
        }
        if let Some(v) = lookup("PAGEWRIGHT_HEADLESS") {
            self.browser.headless = parse_bool("PAGEWRIGHT_HEADLESS", &v)?;
        }
        if let Some(v) = lookup("PAGEWRIGHT_CHROMIUM_PATH") {
            self.browser.chromium_path = Some(v);
        }
        if let Some(v) = lookup("PAGEWRIGHT_ELEMENT_TIMEOUT_MS") {
            self.element_timeout_ms = v.trim().parse().map_err(|_| {
                PagewrightError::config(format!("PAGEWRIGHT_ELEMENT_TIMEOUT_MS: not a number: {v}"))
            })?;
        }
        Ok(self)
    }

    /// Reject configurations no session could work with
    pub fn validate(&self) -> PagewrightResult<()> {
        let url = self.base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PagewrightError::config(format!(
                "base_url must be http(s): {}",
                self.base_url
            )));
        }
        if self.element_timeout_ms == 0 {
            return Err(PagewrightError::config("element_timeout_ms must be > 0"));
        }
        if self.poll_interval_ms == 0 {
            return Err(PagewrightError::config("poll_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// Parsed base URL
    pub fn base_url(&self) -> PagewrightResult<Url> {
        Url::parse(&self.base_url).map_err(|e| PagewrightError::InvalidUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })
    }

    /// Wait options every element in a session is built with
    #[must_use]
    pub const fn locator_options(&self) -> LocatorOptions {
        LocatorOptions::from_millis(self.element_timeout_ms, self.poll_interval_ms)
    }
}

fn parse_bool(key: &str, value: &str) -> PagewrightResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PagewrightError::config(format!(
            "{key}: expected a boolean, got {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    mod defaults_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = EnvironmentConfig::default();
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.credentials.username, "standard_user");
            assert_eq!(config.credentials.password, "secret_sauce");
            assert!(config.browser.headless);
            assert_eq!(config.element_timeout_ms, 5000);
            config.validate().unwrap();
        }

        #[test]
        fn test_builder() {
            let config = EnvironmentConfig::new()
                .with_base_url("http://localhost:8080")
                .with_credentials(Credentials::new("a", "b"))
                .with_element_timeout(100)
                .with_poll_interval(10);
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.locator_options().timeout_ms(), 100);
        }
    }

    mod yaml_tests {
        use super::*;

        #[test]
        fn test_partial_yaml_keeps_defaults() {
            let config =
                EnvironmentConfig::from_yaml("base_url: http://shop.local\nbrowser:\n  headless: false\n")
                    .unwrap();
            assert_eq!(config.base_url, "http://shop.local");
            assert!(!config.browser.headless);
            assert_eq!(config.browser.viewport_width, 1280);
            assert_eq!(config.credentials, Credentials::default());
        }

        #[test]
        fn test_yaml_round_trip_through_file() {
            let config = EnvironmentConfig::new().with_base_url("http://127.0.0.1:3000");
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

            let loaded = EnvironmentConfig::from_file(file.path()).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_explicit_missing_file_is_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = EnvironmentConfig::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
            assert!(matches!(err, PagewrightError::Io(_)));
        }

        #[test]
        fn test_malformed_yaml() {
            let err = EnvironmentConfig::from_yaml("element_timeout_ms: [1, 2").unwrap_err();
            assert!(matches!(err, PagewrightError::Yaml(_)));
        }
    }

    mod env_tests {
        use super::*;

        #[test]
        fn test_env_overrides() {
            let config = EnvironmentConfig::default()
                .apply_env(env(&[
                    ("PAGEWRIGHT_BASE_URL", "http://staging.local"),
                    ("PAGEWRIGHT_USERNAME", "problem_user"),
                    ("PAGEWRIGHT_HEADLESS", "no"),
                    ("PAGEWRIGHT_ELEMENT_TIMEOUT_MS", "750"),
                    ("PAGEWRIGHT_CHROMIUM_PATH", "/usr/bin/chromium"),
                ]))
                .unwrap();
            assert_eq!(config.base_url, "http://staging.local");
            assert_eq!(config.credentials.username, "problem_user");
            assert_eq!(config.credentials.password, "secret_sauce");
            assert!(!config.browser.headless);
            assert_eq!(config.element_timeout_ms, 750);
            assert_eq!(
                config.browser.chromium_path.as_deref(),
                Some("/usr/bin/chromium")
            );
        }

        #[test]
        fn test_bad_bool() {
            let err = EnvironmentConfig::default()
                .apply_env(env(&[("PAGEWRIGHT_HEADLESS", "maybe")]))
                .unwrap_err();
            assert!(err.to_string().contains("PAGEWRIGHT_HEADLESS"));
        }

        #[test]
        fn test_bad_timeout() {
            let err = EnvironmentConfig::default()
                .apply_env(env(&[("PAGEWRIGHT_ELEMENT_TIMEOUT_MS", "soon")]))
                .unwrap_err();
            assert!(matches!(err, PagewrightError::Config { .. }));
        }
    }

    mod validate_tests {
        use super::*;

        #[test]
        fn test_relative_base_url_rejected() {
            let err = EnvironmentConfig::new()
                .with_base_url("/inventory.html")
                .validate()
                .unwrap_err();
            assert!(matches!(err, PagewrightError::InvalidUrl { .. }));
        }

        #[test]
        fn test_non_http_scheme_rejected() {
            let err = EnvironmentConfig::new()
                .with_base_url("file:///tmp/index.html")
                .validate()
                .unwrap_err();
            assert!(matches!(err, PagewrightError::Config { .. }));
        }

        #[test]
        fn test_zero_timeout_rejected() {
            assert!(EnvironmentConfig::new()
                .with_element_timeout(0)
                .validate()
                .is_err());
        }
    }
}
