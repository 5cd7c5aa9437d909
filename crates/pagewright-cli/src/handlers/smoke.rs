//! Smoke command handler
//!
//! Runs the login scenario once: open the login page, log in with the
//! configured credentials, verify the inventory and read the first product.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::SmokeArgs;
use pagewright::{
    Credentials, DemoStoreDriver, DriverRef, EnvironmentConfig, InventoryPage, Navigation,
    PageObject, PagewrightError, PagewrightResult, Session,
};
use std::sync::Arc;

/// Result of one smoke step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Step name
    pub step: &'static str,
    /// Detail shown on success
    pub detail: String,
}

/// Steps that passed, plus the step that stopped the run if any
#[derive(Debug, Default)]
pub struct SmokeReport {
    /// Steps completed in order
    pub passed: Vec<StepOutcome>,
    /// Failing step name and its error
    pub failure: Option<(&'static str, PagewrightError)>,
}

/// Execute the smoke command
///
/// Every completed step is reported, including those that ran before a
/// failure.
pub fn execute_smoke(config: &CliConfig, args: &SmokeArgs) -> CliResult<Vec<StepOutcome>> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let environment = EnvironmentConfig::load(args.file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let driver = open_driver(&environment, args.demo).await?;
        reporter.info(&format!("Smoke check against {}", environment.base_url));

        let credentials = environment.credentials.clone();
        let report = Session::run(&environment, driver, |nav| async move {
            Ok::<_, PagewrightError>(smoke_scenario(&nav, &credentials).await)
        })
        .await?;

        for step in &report.passed {
            reporter.success(&format!("{}: {}", step.step, step.detail));
        }
        match report.failure {
            None => Ok(report.passed),
            Some((step, err)) => {
                reporter.failure(&format!("{step}: {err}"));
                Err(CliError::smoke_failed(step, err.to_string()))
            }
        }
    })
}

async fn open_driver(environment: &EnvironmentConfig, demo: bool) -> CliResult<DriverRef> {
    if demo {
        return Ok(Arc::new(DemoStoreDriver::from_config(environment)?));
    }
    launch(environment).await
}

#[cfg(feature = "browser")]
async fn launch(environment: &EnvironmentConfig) -> CliResult<DriverRef> {
    Ok(pagewright::launch_chromium(environment).await?)
}

#[cfg(not(feature = "browser"))]
async fn launch(_environment: &EnvironmentConfig) -> CliResult<DriverRef> {
    Err(CliError::config(
        "built without the `browser` feature; rerun with --demo or rebuild with --features browser",
    ))
}

/// Run every step, stopping at the first failure
pub async fn smoke_scenario(nav: &Navigation, credentials: &Credentials) -> SmokeReport {
    let mut report = SmokeReport::default();
    if let Err(failure) = run_steps(nav, credentials, &mut report.passed).await {
        report.failure = Some(failure);
    }
    report
}

async fn run_steps(
    nav: &Navigation,
    credentials: &Credentials,
    passed: &mut Vec<StepOutcome>,
) -> Result<(), (&'static str, PagewrightError)> {
    let login = step("open login page", nav.navigate_to_login_page()).await?;
    passed.push(StepOutcome {
        step: "open login page",
        detail: nav.base_url().to_string(),
    });

    step("log in", login.login_with(credentials)).await?;
    passed.push(StepOutcome {
        step: "log in",
        detail: credentials.username.clone(),
    });

    let inventory = step("verify inventory", async {
        nav.page::<InventoryPage>().verify(nav.driver()).await
    })
    .await?;
    passed.push(StepOutcome {
        step: "verify inventory",
        detail: InventoryPage::NAME.to_string(),
    });

    let first = step("read first item", inventory.item_name(1)).await?;
    passed.push(StepOutcome {
        step: "read first item",
        detail: first,
    });
    Ok(())
}

async fn step<T>(
    name: &'static str,
    action: impl std::future::Future<Output = PagewrightResult<T>>,
) -> Result<T, (&'static str, PagewrightError)> {
    tracing::info!(step = name, "smoke step");
    action.await.map_err(|e| (name, e))
}
