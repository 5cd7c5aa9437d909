//! Wait mechanisms shared by elements and page verification.
//!
//! Waits poll an async probe at the locator's interval until it reports
//! success or the timeout elapses. The probe always runs at least once, so a
//! zero timeout degrades to a single immediate check.

use crate::locator::LocatorOptions;
use crate::result::PagewrightResult;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Result of a wait operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitResult {
    /// Whether the condition was met before the timeout
    pub success: bool,
    /// Time spent waiting
    pub elapsed: Duration,
    /// Number of probes performed
    pub attempts: u32,
    /// Description of what was waited for
    pub waited_for: String,
}

impl WaitResult {
    /// Create a successful wait result
    #[must_use]
    pub fn success(elapsed: Duration, attempts: u32, waited_for: impl Into<String>) -> Self {
        Self {
            success: true,
            elapsed,
            attempts,
            waited_for: waited_for.into(),
        }
    }

    /// Create a timeout wait result
    #[must_use]
    pub fn timeout(elapsed: Duration, attempts: u32, waited_for: impl Into<String>) -> Self {
        Self {
            success: false,
            elapsed,
            attempts,
            waited_for: waited_for.into(),
        }
    }
}

/// Poll `probe` until it yields `true` or the options' timeout elapses.
///
/// Errors from the probe abort the wait immediately. A timeout is reported
/// through [`WaitResult::success`], not as an error; callers pick the error
/// kind that fits.
pub async fn poll_until<F, Fut>(
    options: &LocatorOptions,
    waited_for: &str,
    mut probe: F,
) -> PagewrightResult<WaitResult>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = PagewrightResult<bool>>,
{
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        if probe().await? {
            return Ok(WaitResult::success(start.elapsed(), attempts, waited_for));
        }
        if start.elapsed() >= options.timeout {
            tracing::debug!(waited_for, attempts, "wait timed out");
            return Ok(WaitResult::timeout(start.elapsed(), attempts, waited_for));
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}
