//! Pagewright: page objects and a navigation facade for browser end-to-end tests
//!
//! Tests never touch selectors or the browser directly. They ask the
//! [`Navigation`] facade for a page, and the page object exposes the actions
//! and queries a user would perform.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PAGEWRIGHT Architecture                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Test case  │───►│ Navigation │───►│ Page       │            │
//! │   │            │    │ facade     │    │ objects    │            │
//! │   └────────────┘    └────────────┘    └─────┬──────┘            │
//! │                                             ▼                   │
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Chromium   │◄───│ Browser    │◄───│ Element +  │            │
//! │   │ / demo     │    │ Driver     │    │ Locator    │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pagewright::prelude::*;
//!
//! # async fn demo() -> PagewrightResult<()> {
//! let config = EnvironmentConfig::load(None)?;
//! let session = Session::demo_store(&config)?;
//! let inventory = session
//!     .navigation()
//!     .navigate_to_inventory_page(&config.credentials)
//!     .await?;
//! assert_eq!(inventory.item_price(3).await?, "$15.99");
//! session.close().await
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod demo_store;
mod driver;
mod element;
mod fixture;
mod locator;
mod navigation;
mod page_object;
mod pages;
mod result;
mod wait;

/// Global tracing subscriber setup
pub mod logging;

#[cfg(feature = "browser")]
mod browser;

pub use config::{
    BrowserSettings, Credentials, EnvironmentConfig, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE,
    STANDARD_PASSWORD, STANDARD_USER,
};
pub use demo_store::{DemoStoreDriver, Product, ACCEPTED_USERS, CATALOG, LOCKED_OUT_USER};
pub use driver::{BrowserDriver, DriverRef, ElementHandle, MockDriver};
pub use element::{Element, ElementKind};
pub use fixture::Session;
pub use locator::{
    Locator, LocatorOptions, Selector, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
};
pub use navigation::Navigation;
pub use page_object::{PageIdentity, PageObject};
pub use pages::{InventoryPage, LoginPage};
pub use result::{PagewrightError, PagewrightResult};
pub use wait::{poll_until, WaitResult};

#[cfg(feature = "browser")]
pub use browser::ChromiumDriver;
#[cfg(feature = "browser")]
pub use fixture::launch_chromium;

/// Everything a test file needs
pub mod prelude {
    pub use super::{
        BrowserDriver, Credentials, DemoStoreDriver, DriverRef, Element, ElementKind,
        EnvironmentConfig, InventoryPage, Locator, LocatorOptions, LoginPage, MockDriver,
        Navigation, PageIdentity, PageObject, PagewrightError, PagewrightResult, Selector,
        Session,
    };

    #[cfg(feature = "browser")]
    pub use super::{launch_chromium, ChromiumDriver};
}
