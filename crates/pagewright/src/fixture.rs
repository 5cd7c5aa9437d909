//! Driver session lifecycle.
//!
//! A [`Session`] owns one driver for the length of a test. [`Session::run`]
//! is the setup/teardown pair: the driver is closed after the body finishes,
//! whether it returned `Ok`, returned an error, or panicked.

use crate::config::EnvironmentConfig;
use crate::demo_store::DemoStoreDriver;
use crate::driver::DriverRef;
use crate::navigation::Navigation;
use crate::result::PagewrightResult;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// One driver session plus the navigation facade bound to it
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    driver: DriverRef,
    navigation: Navigation,
}

impl Session {
    /// Bind a driver to the configured environment
    pub fn new(driver: DriverRef, config: &EnvironmentConfig) -> PagewrightResult<Self> {
        let navigation = Navigation::new(driver.clone(), config)?;
        Ok(Self {
            id: Uuid::new_v4(),
            driver,
            navigation,
        })
    }

    /// Session backed by the in-memory storefront at the configured base URL
    pub fn demo_store(config: &EnvironmentConfig) -> PagewrightResult<Self> {
        Self::new(Arc::new(DemoStoreDriver::from_config(config)?), config)
    }

    /// Unique id, used to tag log output
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Underlying driver
    #[must_use]
    pub const fn driver(&self) -> &DriverRef {
        &self.driver
    }

    /// Navigation facade for this session
    #[must_use]
    pub const fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Close the driver
    pub async fn close(self) -> PagewrightResult<()> {
        tracing::debug!(session = %self.id, "closing session");
        self.driver.close().await
    }

    /// Run `body` against a fresh session and always close it afterwards.
    ///
    /// The driver is also closed when the session cannot be set up, in which
    /// case `body` never runs.
    ///
    /// An error from the body wins over an error from closing. A panic in the
    /// body is resumed once the driver is closed.
    pub async fn run<F, Fut, T>(
        config: &EnvironmentConfig,
        driver: DriverRef,
        body: F,
    ) -> PagewrightResult<T>
    where
        F: FnOnce(Navigation) -> Fut,
        Fut: Future<Output = PagewrightResult<T>>,
    {
        let session = match Self::new(driver.clone(), config) {
            Ok(session) => session,
            Err(e) => {
                if let Err(close_err) = driver.close().await {
                    tracing::warn!(error = %close_err, "close failed after setup error");
                }
                return Err(e);
            }
        };
        let span = tracing::info_span!("session", id = %session.id);

        let outcome = AssertUnwindSafe(body(session.navigation.clone()))
            .catch_unwind()
            .instrument(span.clone())
            .await;
        let closed = session.close().instrument(span).await;

        match outcome {
            Err(panic) => {
                if let Err(e) = closed {
                    tracing::warn!(error = %e, "close failed after panic");
                }
                std::panic::resume_unwind(panic)
            }
            Ok(Err(e)) => {
                if let Err(close_err) = closed {
                    tracing::warn!(error = %close_err, "close failed after test error");
                }
                Err(e)
            }
            Ok(Ok(value)) => closed.map(|()| value),
        }
    }
}

/// Launch Chromium with the configured browser settings
#[cfg(feature = "browser")]
pub async fn launch_chromium(config: &EnvironmentConfig) -> PagewrightResult<DriverRef> {
    let driver = crate::browser::ChromiumDriver::launch(&config.browser).await?;
    Ok(Arc::new(driver))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::PagewrightError;

    fn config() -> EnvironmentConfig {
        EnvironmentConfig::new()
            .with_element_timeout(50)
            .with_poll_interval(5)
    }

    fn store() -> DemoStoreDriver {
        DemoStoreDriver::from_config(&config()).unwrap()
    }

    mod session_tests {
        use super::*;

        #[test]
        fn test_ids_are_unique() {
            let a = Session::demo_store(&config()).unwrap();
            let b = Session::demo_store(&config()).unwrap();
            assert_ne!(a.id(), b.id());
        }

        #[test]
        fn test_invalid_config_fails_before_run() {
            let bad = config().with_base_url("ftp://example.com");
            assert!(Session::demo_store(&bad).is_err());
        }

        #[tokio::test]
        async fn test_demo_store_accepts_uppercase_host_with_default_port() {
            let config = config().with_base_url("https://WWW.SauceDemo.com:443");
            let session = Session::demo_store(&config).unwrap();
            session.navigation().navigate_to_login_page().await.unwrap();
            let inventory = session
                .navigation()
                .navigate_to_inventory_page(&config.credentials)
                .await
                .unwrap();
            assert_eq!(inventory.item_name(1).await.unwrap(), "Sauce Labs Backpack");
        }
    }

    mod run_tests {
        use super::*;

        #[tokio::test]
        async fn test_closes_after_success() {
            let store = Arc::new(store());
            let value = Session::run(&config(), store.clone(), |nav| async move {
                nav.navigate_to_login_page().await?;
                Ok::<_, PagewrightError>(7)
            })
            .await
            .unwrap();

            assert_eq!(value, 7);
            assert!(store.is_closed());
        }

        #[tokio::test]
        async fn test_closes_after_error() {
            let store = Arc::new(store());
            let err = Session::run(&config(), store.clone(), |_nav| async move {
                Err::<(), _>(PagewrightError::assertion("boom"))
            })
            .await
            .unwrap_err();

            assert!(matches!(err, PagewrightError::AssertionFailed { .. }));
            assert!(store.is_closed());
        }

        #[tokio::test]
        async fn test_closes_after_panic() {
            let store = Arc::new(store());
            let driver: DriverRef = store.clone();
            let joined = tokio::spawn(async move {
                Session::run(&config(), driver, |nav| async move {
                    if nav.base_url().scheme() == "https" {
                        panic!("test body panicked");
                    }
                    Ok::<_, PagewrightError>(())
                })
                .await
            })
            .await;

            assert!(joined.unwrap_err().is_panic());
            assert!(store.is_closed());
        }

        #[tokio::test]
        async fn test_closes_when_setup_fails() {
            let store = Arc::new(store());
            let bad = config().with_base_url("ftp://example.com");
            let ran = Arc::new(std::sync::atomic::AtomicBool::new(false));
            let flag = ran.clone();
            let err = Session::run(&bad, store.clone(), |_nav| async move {
                flag.store(true, std::sync::atomic::Ordering::SeqCst);
                Ok::<_, PagewrightError>(())
            })
            .await
            .unwrap_err();

            assert!(matches!(err, PagewrightError::Config { .. }));
            assert!(!ran.load(std::sync::atomic::Ordering::SeqCst));
            assert!(store.is_closed());
        }
    }
}
