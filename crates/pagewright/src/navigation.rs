//! Navigation facade.
//!
//! All page-to-page transitions go through [`Navigation`]. Each entry point
//! drives the browser, optionally performs a chained action, and hands back a
//! freshly built page object that has passed its landmark check.

use crate::config::{Credentials, EnvironmentConfig};
use crate::driver::DriverRef;
use crate::locator::LocatorOptions;
use crate::page_object::PageObject;
use crate::pages::{InventoryPage, LoginPage};
use crate::result::{PagewrightError, PagewrightResult};
use url::Url;

/// Entry points into the page graph for one driver session
#[derive(Debug, Clone)]
pub struct Navigation {
    driver: DriverRef,
    base_url: Url,
    options: LocatorOptions,
}

impl Navigation {
    /// Create the facade for a session
    pub fn new(driver: DriverRef, config: &EnvironmentConfig) -> PagewrightResult<Self> {
        config.validate()?;
        Ok(Self {
            driver,
            base_url: config.base_url()?,
            options: config.locator_options(),
        })
    }

    /// The session driven by this facade
    #[must_use]
    pub const fn driver(&self) -> &DriverRef {
        &self.driver
    }

    /// Configured base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an absolute URL, or a path relative to the base URL.
    ///
    /// Relative paths keep any path prefix of the base URL, so
    /// `http://host/app` + `/inventory.html` is `http://host/app/inventory.html`.
    pub fn resolve(&self, target: &str) -> PagewrightResult<Url> {
        if let Ok(absolute) = Url::parse(target) {
            return Ok(absolute);
        }
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(target.trim_start_matches('/'))
            .map_err(|e| PagewrightError::InvalidUrl {
                url: target.to_string(),
                message: e.to_string(),
            })
    }

    /// Drive the browser to `target` without building a page
    pub async fn navigate(&self, target: &str) -> PagewrightResult<()> {
        let url = self.resolve(target)?;
        tracing::info!(%url, "navigating");
        self.driver.navigate(url.as_str()).await
    }

    /// Build `P` for whatever the browser currently shows, without verifying
    #[must_use]
    pub fn page<P: PageObject>(&self) -> P {
        P::from_driver(self.driver.clone(), self.options)
    }

    /// Navigate to `P`'s own path and verify the browser got there
    pub async fn navigate_to<P: PageObject>(&self) -> PagewrightResult<P> {
        self.navigate(P::url_path()).await?;
        self.page::<P>().verify(&self.driver).await
    }

    /// Open the login screen
    pub async fn navigate_to_login_page(&self) -> PagewrightResult<LoginPage> {
        self.navigate_to::<LoginPage>().await
    }

    /// Open the login screen, log in, and land on the inventory
    pub async fn navigate_to_inventory_page(
        &self,
        credentials: &Credentials,
    ) -> PagewrightResult<InventoryPage> {
        self.navigate_to_login_page()
            .await?
            .login_with(credentials)
            .await?;
        self.page::<InventoryPage>().verify(&self.driver).await
    }
}
