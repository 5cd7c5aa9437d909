//! BrowserDriver - Abstract Browser Automation Trait
//!
//! Everything above this trait (elements, page objects, navigation) talks to
//! the browser only through [`BrowserDriver`], so the same page objects run
//! against Chromium over CDP, the in-memory demo store, or a bare mock.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  BrowserDriver (Abstract Trait)                               │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────┐ │
//! │  │ ChromiumDriver  │  │ DemoStoreDriver  │  │ MockDriver   │ │
//! │  │ (feature        │  │ (simulated       │  │ (unit tests) │ │
//! │  │  "browser")     │  │  storefront)     │  │              │ │
//! │  └─────────────────┘  └──────────────────┘  └──────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::result::{PagewrightError, PagewrightResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot of one matched DOM element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Element tag name, lowercase
    pub tag_name: String,
    /// Rendered text content
    pub text: Option<String>,
    /// Whether the element is rendered and not hidden
    pub visible: bool,
}

impl ElementHandle {
    /// Create a visible element handle with no text
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            text: None,
            visible: true,
        }
    }

    /// Set text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Mark the element hidden
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Check if element is visible
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Abstract driver trait for browser automation.
///
/// Methods take `&self`; implementations synchronize internally so a single
/// session can be shared by the navigation facade and every page object it
/// hands out. `click` and `type_text` act on the first match and fail with
/// [`PagewrightError::ElementNotFound`] when nothing matches.
#[async_trait]
pub trait BrowserDriver: Send + Sync + std::fmt::Debug {
    /// Navigate to an absolute URL
    async fn navigate(&self, url: &str) -> PagewrightResult<()>;

    /// Get current URL
    async fn current_url(&self) -> PagewrightResult<String>;

    /// Query all elements matching a CSS selector
    async fn query_selector_all(&self, selector: &str) -> PagewrightResult<Vec<ElementHandle>>;

    /// Click the first element matching a CSS selector
    async fn click(&self, selector: &str) -> PagewrightResult<()>;

    /// Type text into the first element matching a CSS selector
    async fn type_text(&self, selector: &str, text: &str) -> PagewrightResult<()>;

    /// Close the browser session
    async fn close(&self) -> PagewrightResult<()>;
}

/// Shared handle to a driver session
pub type DriverRef = Arc<dyn BrowserDriver>;

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock driver for unit testing.
///
/// Elements are registered per exact CSS selector string; every call is
/// recorded so tests can check what the code under test did.
#[derive(Debug, Default)]
pub struct MockDriver {
    current_url: Mutex<String>,
    elements: Mutex<HashMap<String, Vec<ElementHandle>>>,
    call_history: Mutex<Vec<String>>,
}

impl MockDriver {
    /// Create new mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a matching element for a selector
    #[must_use]
    pub fn with_element(self, selector: impl Into<String>, element: ElementHandle) -> Self {
        self.add_element(selector, element);
        self
    }

    /// Register a matching element for a selector
    pub fn add_element(&self, selector: impl Into<String>, element: ElementHandle) {
        lock(&self.elements)
            .entry(selector.into())
            .or_default()
            .push(element);
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        lock(&self.call_history).clone()
    }

    /// Check if method was called
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        lock(&self.call_history)
            .iter()
            .any(|c| c.starts_with(method))
    }

    fn record(&self, call: String) {
        lock(&self.call_history).push(call);
    }

    fn require(&self, selector: &str) -> PagewrightResult<()> {
        let found = lock(&self.elements)
            .get(selector)
            .is_some_and(|els| !els.is_empty());
        if found {
            Ok(())
        } else {
            Err(PagewrightError::ElementNotFound {
                selector: selector.to_string(),
            })
        }
    }
}

#[async_trait]
impl BrowserDriver for MockDriver {
    async fn navigate(&self, url: &str) -> PagewrightResult<()> {
        self.record(format!("navigate:{url}"));
        *lock(&self.current_url) = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> PagewrightResult<String> {
        Ok(lock(&self.current_url).clone())
    }

    async fn query_selector_all(&self, selector: &str) -> PagewrightResult<Vec<ElementHandle>> {
        self.record(format!("query:{selector}"));
        Ok(lock(&self.elements)
            .get(selector)
            .cloned()
            .unwrap_or_default())
    }

    async fn click(&self, selector: &str) -> PagewrightResult<()> {
        self.require(selector)?;
        self.record(format!("click:{selector}"));
        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> PagewrightResult<()> {
        self.require(selector)?;
        self.record(format!("type:{selector}:{text}"));
        Ok(())
    }

    async fn close(&self) -> PagewrightResult<()> {
        self.record("close".to_string());
        Ok(())
    }
}
