//! Login screen (`/`).

use crate::config::Credentials;
use crate::driver::DriverRef;
use crate::element::Element;
use crate::locator::{LocatorOptions, Selector};
use crate::page_object::{PageIdentity, PageObject};
use crate::result::PagewrightResult;

/// The storefront's login form.
///
/// The credentials hint box is the landmark; it is only rendered on the
/// login screen.
#[derive(Debug, Clone)]
pub struct LoginPage {
    username_input: Element,
    password_input: Element,
    submit_button: Element,
    credentials_info: Element,
    login_error_message: Element,
}

impl LoginPage {
    /// Username field
    #[must_use]
    pub const fn username_input(&self) -> &Element {
        &self.username_input
    }

    /// Password field
    #[must_use]
    pub const fn password_input(&self) -> &Element {
        &self.password_input
    }

    /// Login button
    #[must_use]
    pub const fn submit_button(&self) -> &Element {
        &self.submit_button
    }

    /// Accepted-usernames hint box
    #[must_use]
    pub const fn credentials_info(&self) -> &Element {
        &self.credentials_info
    }

    /// Error banner shown after a rejected login
    #[must_use]
    pub const fn login_error_message(&self) -> &Element {
        &self.login_error_message
    }

    /// Fill both fields and press the login button.
    ///
    /// Where the browser ends up is left to the caller to check.
    pub async fn login(&self, username: &str, password: &str) -> PagewrightResult<()> {
        tracing::info!(username, "logging in");
        self.username_input.send_keys(username).await?;
        self.password_input.send_keys(password).await?;
        self.submit_button.click().await
    }

    /// [`login`](Self::login) with a credentials pair
    pub async fn login_with(&self, credentials: &Credentials) -> PagewrightResult<()> {
        self.login(&credentials.username, &credentials.password)
            .await
    }

    /// Text of the error banner
    pub async fn error_message(&self) -> PagewrightResult<String> {
        self.login_error_message.text().await
    }
}

impl PageIdentity for LoginPage {
    fn landmark(&self) -> &Element {
        &self.credentials_info
    }
}

impl PageObject for LoginPage {
    const NAME: &'static str = "LoginPage";

    fn url_path() -> &'static str {
        "/"
    }

    fn from_driver(driver: DriverRef, options: LocatorOptions) -> Self {
        Self {
            username_input: Element::input(driver.clone(), Selector::id("user-name"))
                .with_options(options),
            password_input: Element::input(driver.clone(), Selector::id("password"))
                .with_options(options),
            submit_button: Element::button(driver.clone(), Selector::class_name("btn_action"))
                .with_options(options),
            credentials_info: Element::div(driver.clone(), Selector::id("login_credentials"))
                .with_options(options),
            login_error_message: Element::div(driver, Selector::css("[data-test=error]"))
                .with_options(options),
        }
    }
}
