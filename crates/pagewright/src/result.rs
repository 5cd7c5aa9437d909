//! Result and error types for Pagewright.

use thiserror::Error;

/// Result type for Pagewright operations
pub type PagewrightResult<T> = Result<T, PagewrightError>;

/// Errors that can occur while driving pages
#[derive(Debug, Error)]
pub enum PagewrightError {
    /// Locator matched nothing on the current page
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// CSS selector that was queried
        selector: String,
    },

    /// Locator matched, but the element never became visible
    #[error("Element {selector} not visible after {timeout_ms}ms")]
    ElementNotVisible {
        /// CSS selector that was queried
        selector: String,
        /// Wait window in milliseconds
        timeout_ms: u64,
    },

    /// A page's landmark element was absent after navigation
    #[error("Navigation verification failed: {page} landmark {landmark} not visible at {url}")]
    NavigationVerificationFailed {
        /// Page object name
        page: String,
        /// Landmark selector
        landmark: String,
        /// URL the browser was on
        url: String,
    },

    /// Expected vs. actual mismatch
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    NavigationError {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunchError {
        /// Error message
        message: String,
    },

    /// Any other failure reported by the browser driver
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// URL could not be parsed or joined
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl {
        /// Offending URL
        url: String,
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagewrightError {
    /// Create a driver error
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an assertion error
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Whether this error came from locating or waiting on an element
    #[must_use]
    pub const fn is_element_error(&self) -> bool {
        matches!(
            self,
            Self::ElementNotFound { .. } | Self::ElementNotVisible { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_message() {
        let err = PagewrightError::ElementNotFound {
            selector: "#user-name".to_string(),
        };
        assert_eq!(err.to_string(), "Element not found: #user-name");
        assert!(err.is_element_error());
    }

    #[test]
    fn test_not_visible_message() {
        let err = PagewrightError::ElementNotVisible {
            selector: ".btn_action".to_string(),
            timeout_ms: 250,
        };
        assert!(err.to_string().contains("250ms"));
        assert!(err.is_element_error());
    }

    #[test]
    fn test_verification_message() {
        let err = PagewrightError::NavigationVerificationFailed {
            page: "InventoryPage".to_string(),
            landmark: ".header_secondary_container".to_string(),
            url: "https://www.saucedemo.com/".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("InventoryPage"));
        assert!(msg.contains(".header_secondary_container"));
        assert!(!err.is_element_error());
    }

    #[test]
    fn test_helpers() {
        assert!(PagewrightError::driver("boom").to_string().contains("boom"));
        assert!(PagewrightError::config("bad")
            .to_string()
            .contains("Configuration"));
        assert!(PagewrightError::assertion("x != y")
            .to_string()
            .starts_with("Assertion failed"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PagewrightError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}
