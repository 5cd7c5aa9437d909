//! Typed element wrappers bound to a driver session.
//!
//! An [`Element`] pairs a [`Locator`] with the session it is resolved in.
//! Interactions wait for the element to be displayed before acting; the
//! wait window comes from the locator's options.

use crate::driver::{lock, DriverRef, ElementHandle};
use crate::locator::{Locator, LocatorOptions, Selector};
use crate::result::{PagewrightError, PagewrightResult};
use crate::wait::poll_until;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// What kind of control an element represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Text input
    Input,
    /// Button
    Button,
    /// Generic container
    Div,
    /// Static text
    StaticText,
}

impl ElementKind {
    /// Short lowercase name for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Button => "button",
            Self::Div => "div",
            Self::StaticText => "text",
        }
    }
}

/// A located element in one driver session
#[derive(Clone)]
pub struct Element {
    kind: ElementKind,
    locator: Locator,
    driver: DriverRef,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("locator", &self.locator.to_css())
            .finish()
    }
}

impl Element {
    /// Bind a locator to a session
    #[must_use]
    pub fn new(driver: DriverRef, kind: ElementKind, locator: Locator) -> Self {
        Self {
            kind,
            locator,
            driver,
        }
    }

    /// Text input located by `selector`
    #[must_use]
    pub fn input(driver: DriverRef, selector: Selector) -> Self {
        Self::new(driver, ElementKind::Input, Locator::from_selector(selector))
    }

    /// Button located by `selector`
    #[must_use]
    pub fn button(driver: DriverRef, selector: Selector) -> Self {
        Self::new(driver, ElementKind::Button, Locator::from_selector(selector))
    }

    /// Container located by `selector`
    #[must_use]
    pub fn div(driver: DriverRef, selector: Selector) -> Self {
        Self::new(driver, ElementKind::Div, Locator::from_selector(selector))
    }

    /// Replace the locator's wait options
    #[must_use]
    pub fn with_options(mut self, options: LocatorOptions) -> Self {
        self.locator = self.locator.with_options(options);
        self
    }

    /// Element nested inside this one
    #[must_use]
    pub fn find(&self, kind: ElementKind, selector: Selector) -> Self {
        Self {
            kind,
            locator: self.locator.child(selector),
            driver: self.driver.clone(),
        }
    }

    /// Get the element kind
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Get the locator
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.locator
    }

    async fn first(&self) -> PagewrightResult<Option<ElementHandle>> {
        let css = self.locator.to_css();
        Ok(self
            .driver
            .query_selector_all(&css)
            .await?
            .into_iter()
            .next())
    }

    /// Whether the locator currently matches anything
    pub async fn exists(&self) -> PagewrightResult<bool> {
        Ok(self.first().await?.is_some())
    }

    /// Whether the first match is currently visible.
    ///
    /// A missing element is reported as not displayed, not as an error.
    pub async fn is_displayed(&self) -> PagewrightResult<bool> {
        Ok(self.first().await?.is_some_and(|h| h.is_visible()))
    }

    /// Wait until the first match is visible.
    ///
    /// On timeout, fails with `ElementNotFound` if the last probe matched
    /// nothing and with `ElementNotVisible` if it matched a hidden element.
    pub async fn wait_until_displayed(&self) -> PagewrightResult<ElementHandle> {
        let css = self.locator.to_css();
        let last: Mutex<Option<ElementHandle>> = Mutex::new(None);
        let result = poll_until(self.locator.options(), &css, || {
            let driver = self.driver.clone();
            let css = css.clone();
            let last = &last;
            async move {
                let handle = driver.query_selector_all(&css).await?.into_iter().next();
                let visible = handle.as_ref().is_some_and(ElementHandle::is_visible);
                *lock(last) = handle;
                Ok(visible)
            }
        })
        .await?;

        match last.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(handle) if result.success => Ok(handle),
            Some(_) => Err(PagewrightError::ElementNotVisible {
                selector: css,
                timeout_ms: self.locator.options().timeout_ms(),
            }),
            None => Err(PagewrightError::ElementNotFound { selector: css }),
        }
    }

    /// Click the element once it is displayed
    pub async fn click(&self) -> PagewrightResult<()> {
        let _ = self.wait_until_displayed().await?;
        tracing::debug!(kind = self.kind.as_str(), selector = %self.locator, "click");
        self.driver.click(&self.locator.to_css()).await
    }

    /// Type text into the element once it is displayed
    pub async fn send_keys(&self, text: &str) -> PagewrightResult<()> {
        let _ = self.wait_until_displayed().await?;
        tracing::debug!(kind = self.kind.as_str(), selector = %self.locator, "send_keys");
        self.driver.type_text(&self.locator.to_css(), text).await
    }

    /// Rendered text of the element once it is displayed
    pub async fn text(&self) -> PagewrightResult<String> {
        let handle = self.wait_until_displayed().await?;
        Ok(handle.text.unwrap_or_default())
    }
}
