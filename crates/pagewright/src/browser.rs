//! Chromium over CDP.
//!
//! Only compiled with the `browser` feature. Visibility and text are read in
//! one round trip by evaluating a small script against the page, so
//! `query_selector_all` returns the same [`ElementHandle`] snapshots the
//! simulated drivers produce.

use crate::config::BrowserSettings;
use crate::driver::{BrowserDriver, ElementHandle};
use crate::result::{PagewrightError, PagewrightResult};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use tokio::sync::Mutex;

/// Real browser session
#[derive(Debug)]
pub struct ChromiumDriver {
    browser: Mutex<CdpBrowser>,
    page: CdpPage,
    handle: tokio::task::JoinHandle<()>,
}

impl ChromiumDriver {
    /// Launch Chromium and open a blank page
    ///
    /// # Errors
    ///
    /// Returns error if browser cannot be launched
    pub async fn launch(settings: &BrowserSettings) -> PagewrightResult<Self> {
        let mut builder =
            CdpConfig::builder().window_size(settings.viewport_width, settings.viewport_height);

        if !settings.headless {
            builder = builder.with_head();
        }

        if !settings.sandbox {
            builder = builder.no_sandbox();
        }

        if let Some(ref path) = settings.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder
            .build()
            .map_err(|message| PagewrightError::BrowserLaunchError { message })?;

        let (browser, mut handler) =
            CdpBrowser::launch(cdp_config)
                .await
                .map_err(|e| PagewrightError::BrowserLaunchError {
                    message: e.to_string(),
                })?;

        let handle = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| PagewrightError::BrowserLaunchError {
                message: e.to_string(),
            })?;

        tracing::info!(headless = settings.headless, "chromium launched");
        Ok(Self {
            browser: Mutex::new(browser),
            page,
            handle,
        })
    }
}

fn snapshot_script(selector: &str) -> PagewrightResult<String> {
    let selector = serde_json::to_string(selector)?;
    Ok(format!(
        "Array.from(document.querySelectorAll({selector})).map(el => {{ \
            const rect = el.getBoundingClientRect(); \
            const style = window.getComputedStyle(el); \
            return {{ \
                tag_name: el.tagName.toLowerCase(), \
                text: el.innerText === undefined ? null : el.innerText, \
                visible: rect.width > 0 && rect.height > 0 \
                    && style.visibility !== 'hidden' && style.display !== 'none' \
            }}; \
        }})"
    ))
}

#[async_trait]
impl BrowserDriver for ChromiumDriver {
    async fn navigate(&self, url: &str) -> PagewrightResult<()> {
        let _ = self
            .page
            .goto(url)
            .await
            .map_err(|e| PagewrightError::NavigationError {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn current_url(&self) -> PagewrightResult<String> {
        let url = self
            .page
            .url()
            .await
            .map_err(|e| PagewrightError::driver(e.to_string()))?;
        Ok(url.unwrap_or_else(|| "about:blank".to_string()))
    }

    async fn query_selector_all(&self, selector: &str) -> PagewrightResult<Vec<ElementHandle>> {
        let result = self
            .page
            .evaluate(snapshot_script(selector)?)
            .await
            .map_err(|e| PagewrightError::driver(e.to_string()))?;
        result
            .into_value()
            .map_err(|e| PagewrightError::driver(e.to_string()))
    }

    async fn click(&self, selector: &str) -> PagewrightResult<()> {
        let element = self.page.find_element(selector).await.map_err(|_| {
            PagewrightError::ElementNotFound {
                selector: selector.to_string(),
            }
        })?;
        let _ = element
            .click()
            .await
            .map_err(|e| PagewrightError::driver(e.to_string()))?;
        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> PagewrightResult<()> {
        let element = self.page.find_element(selector).await.map_err(|_| {
            PagewrightError::ElementNotFound {
                selector: selector.to_string(),
            }
        })?;
        let _ = element
            .click()
            .await
            .map_err(|e| PagewrightError::driver(e.to_string()))?;
        let _ = element
            .type_str(text)
            .await
            .map_err(|e| PagewrightError::driver(e.to_string()))?;
        Ok(())
    }

    async fn close(&self) -> PagewrightResult<()> {
        let mut browser = self.browser.lock().await;
        let _ = browser
            .close()
            .await
            .map_err(|e| PagewrightError::driver(e.to_string()))?;
        self.handle.abort();
        tracing::info!("chromium closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_script_escapes_selector() {
        let script = snapshot_script("[data-test=\"error\"]").unwrap();
        assert!(script.contains(r#"querySelectorAll("[data-test=\"error\"]")"#));
    }
}
