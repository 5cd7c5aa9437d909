//! Page Object Model Support
//!
//! A page object is a value bundling the locators of one screen. Building
//! one never touches the browser; identity is checked through
//! [`PageIdentity::is_on_page`] (a plain query) or [`PageObject::verify`]
//! (a bounded wait that fails with `NavigationVerificationFailed`).
//!
//! # Example
//!
//! ```ignore
//! struct CartPage {
//!     title: Element,
//! }
//!
//! impl PageIdentity for CartPage {
//!     fn landmark(&self) -> &Element {
//!         &self.title
//!     }
//! }
//!
//! impl PageObject for CartPage {
//!     const NAME: &'static str = "CartPage";
//!
//!     fn url_path() -> &'static str {
//!         "/cart.html"
//!     }
//!
//!     fn from_driver(driver: DriverRef, options: LocatorOptions) -> Self {
//!         Self {
//!             title: Element::div(driver, Selector::class_name("title")).with_options(options),
//!         }
//!     }
//! }
//! ```

use crate::driver::DriverRef;
use crate::element::Element;
use crate::locator::LocatorOptions;
use crate::result::{PagewrightError, PagewrightResult};
use crate::wait::poll_until;
use async_trait::async_trait;

/// Capability: a page that can tell whether the browser is showing it.
#[async_trait]
pub trait PageIdentity: Send + Sync {
    /// Distinguishing element of this page
    fn landmark(&self) -> &Element;

    /// Whether the landmark is visible right now.
    ///
    /// Performs no assertion and no waiting; callers decide how to react.
    async fn is_on_page(&self) -> PagewrightResult<bool> {
        self.landmark().is_displayed().await
    }
}

/// A page object representing one screen of the application under test.
#[async_trait]
pub trait PageObject: PageIdentity + Sized {
    /// Page name for logging and errors
    const NAME: &'static str;

    /// Path of this page relative to the base URL
    fn url_path() -> &'static str;

    /// Build the page's locators for `driver`. Never queries the browser.
    fn from_driver(driver: DriverRef, options: LocatorOptions) -> Self;

    /// Wait for the landmark to be displayed and hand the page back.
    ///
    /// The wait window is the landmark locator's timeout.
    async fn verify(self, driver: &DriverRef) -> PagewrightResult<Self> {
        let landmark = self.landmark().clone();
        let result = poll_until(
            landmark.locator().options(),
            Self::NAME,
            || landmark.is_displayed(),
        )
        .await?;

        if result.success {
            tracing::debug!(page = Self::NAME, attempts = result.attempts, "page verified");
            Ok(self)
        } else {
            let url = driver.current_url().await.unwrap_or_default();
            tracing::warn!(page = Self::NAME, %url, "page verification failed");
            Err(PagewrightError::NavigationVerificationFailed {
                page: Self::NAME.to_string(),
                landmark: landmark.locator().to_css(),
                url,
            })
        }
    }
}
