//! In-memory simulation of the demo storefront.
//!
//! [`DemoStoreDriver`] answers the same selectors the real site renders for
//! the login and inventory screens and reacts to clicks and typing the way
//! the site does: login checks credentials, add/remove buttons flip, the
//! inventory is only reachable with a session. It lets the page objects and
//! the example suites run without a browser.

use crate::config::{EnvironmentConfig, STANDARD_PASSWORD};
use crate::driver::{lock, BrowserDriver, ElementHandle};
use crate::result::{PagewrightError, PagewrightResult};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Mutex;
use url::Url;

/// A product in the storefront catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Display name
    pub name: &'static str,
    /// Marketing description
    pub description: &'static str,
    /// Price as rendered
    pub price: &'static str,
}

/// Catalog in the default (name A→Z) order
pub const CATALOG: [Product; 6] = [
    Product {
        name: "Sauce Labs Backpack",
        description: "carry.allTheThings() with the sleek, streamlined Sly Pack that melds uncompromising style with unequaled laptop and tablet protection.",
        price: "$29.99",
    },
    Product {
        name: "Sauce Labs Bike Light",
        description: "A red light isn't the desired state in testing but it sure helps when riding your bike at night. Water-resistant with 3 lighting modes, 1 AAA battery included.",
        price: "$9.99",
    },
    Product {
        name: "Sauce Labs Bolt T-Shirt",
        description: "Get your testing superhero on with the Sauce Labs bolt T-shirt. From American Apparel, 100% ringspun combed cotton, heather gray with red bolt.",
        price: "$15.99",
    },
    Product {
        name: "Sauce Labs Fleece Jacket",
        description: "It's not every day that you come across a midweight quarter-zip fleece jacket capable of handling everything from a relaxing day outdoors to a busy day at the office.",
        price: "$49.99",
    },
    Product {
        name: "Sauce Labs Onesie",
        description: "Rib snap infant onesie for the junior automation engineer in development. Reinforced 3-snap bottom closure, two-needle hemmed sleeved and bottom won't unravel.",
        price: "$7.99",
    },
    Product {
        name: "Test.allTheThings() T-Shirt (Red)",
        description: "This classic Sauce Labs t-shirt is perfect to wear when cozying up to your keyboard to automate a few tests. Super-soft and comfy ringspun combed cotton.",
        price: "$15.99",
    },
];

/// Usernames that can log in
pub const ACCEPTED_USERS: [&str; 3] = ["standard_user", "problem_user", "performance_glitch_user"];

/// Username that exists but is refused
pub const LOCKED_OUT_USER: &str = "locked_out_user";

const ERR_USERNAME_REQUIRED: &str = "Epic sadface: Username is required";
const ERR_PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";
const ERR_LOCKED_OUT: &str = "Epic sadface: Sorry, this user has been locked out.";
const ERR_NO_MATCH: &str =
    "Epic sadface: Username and password do not match any user in this service";
const ERR_NOT_LOGGED_IN: &str =
    "Epic sadface: You can only access '/inventory.html' when you are logged in.";

const ITEM_PREFIX: &str = ".inventory_list div.inventory_item:nth-of-type(";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Blank,
    Login,
    Inventory,
    NotFound,
}

#[derive(Debug)]
struct StoreState {
    url: String,
    screen: Screen,
    username_field: String,
    password_field: String,
    error: Option<&'static str>,
    session_user: Option<String>,
    cart: BTreeSet<usize>,
    closed: bool,
}

/// Simulated storefront implementing [`BrowserDriver`]
#[derive(Debug)]
pub struct DemoStoreDriver {
    base_url: Url,
    state: Mutex<StoreState>,
}

impl DemoStoreDriver {
    /// Create a store served at `base_url`
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            state: Mutex::new(StoreState {
                url: "about:blank".to_string(),
                screen: Screen::Blank,
                username_field: String::new(),
                password_field: String::new(),
                error: None,
                session_user: None,
                cart: BTreeSet::new(),
                closed: false,
            }),
        }
    }

    /// Store served at the configured base URL
    pub fn from_config(config: &EnvironmentConfig) -> PagewrightResult<Self> {
        Ok(Self::new(config.base_url()?))
    }

    /// Item numbers currently in the cart
    #[must_use]
    pub fn cart(&self) -> Vec<usize> {
        lock(&self.state).cart.iter().copied().collect()
    }

    /// Whether `close` has been called
    #[must_use]
    pub fn is_closed(&self) -> bool {
        lock(&self.state).closed
    }

    fn open(&self) -> PagewrightResult<std::sync::MutexGuard<'_, StoreState>> {
        let state = lock(&self.state);
        if state.closed {
            return Err(PagewrightError::driver("session closed"));
        }
        Ok(state)
    }

    /// Path of `url` below the base URL, or `None` when it is outside the store.
    ///
    /// Compares parsed URLs so host case and default ports do not matter.
    fn route(&self, url: &str) -> Option<String> {
        let target = Url::parse(url).ok()?;
        if target.origin() != self.base_url.origin() {
            return None;
        }
        let prefix = self.base_url.path().trim_end_matches('/');
        let rest = target.path().strip_prefix(prefix)?;
        match rest {
            "" => Some("/".to_string()),
            _ if rest.starts_with('/') => Some(rest.to_string()),
            _ => None,
        }
    }

    fn page_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn show_login(state: &mut StoreState, error: Option<&'static str>) {
    state.screen = Screen::Login;
    state.username_field.clear();
    state.password_field.clear();
    state.error = error;
}

fn authenticate(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err(ERR_USERNAME_REQUIRED);
    }
    if password.is_empty() {
        return Err(ERR_PASSWORD_REQUIRED);
    }
    if password != STANDARD_PASSWORD {
        return Err(ERR_NO_MATCH);
    }
    if username == LOCKED_OUT_USER {
        return Err(ERR_LOCKED_OUT);
    }
    if ACCEPTED_USERS.contains(&username) {
        Ok(())
    } else {
        Err(ERR_NO_MATCH)
    }
}

/// Split `.inventory_list div.inventory_item:nth-of-type(N) rest` into
/// (N, rest). `rest` is empty for the item container itself.
fn item_query(selector: &str) -> Option<(usize, &str)> {
    let tail = selector.strip_prefix(ITEM_PREFIX)?;
    let (number, rest) = tail.split_once(')')?;
    let number: usize = number.parse().ok()?;
    Some((number, rest.trim_start()))
}

fn query(state: &StoreState, selector: &str) -> Vec<ElementHandle> {
    let found = match state.screen {
        Screen::Login => query_login(state, selector),
        Screen::Inventory => query_inventory(state, selector),
        Screen::Blank | Screen::NotFound => None,
    };
    found.into_iter().collect()
}

fn query_login(state: &StoreState, selector: &str) -> Option<ElementHandle> {
    match selector {
        "#user-name" => Some(ElementHandle::new("input").with_text(&state.username_field)),
        "#password" => Some(ElementHandle::new("input")),
        ".btn_action" => Some(ElementHandle::new("input").with_text("Login")),
        "#login_credentials" => Some(ElementHandle::new("div").with_text(format!(
            "Accepted usernames are:\n{}\n{LOCKED_OUT_USER}",
            ACCEPTED_USERS.join("\n")
        ))),
        "[data-test=error]" => state.error.map(|e| ElementHandle::new("h3").with_text(e)),
        _ => None,
    }
}

fn query_inventory(state: &StoreState, selector: &str) -> Option<ElementHandle> {
    match selector {
        ".inventory_list" => return Some(ElementHandle::new("div")),
        ".header_secondary_container" => {
            return Some(ElementHandle::new("div").with_text("Products"))
        }
        ".shopping_cart_badge" if !state.cart.is_empty() => {
            return Some(ElementHandle::new("span").with_text(state.cart.len().to_string()))
        }
        _ => {}
    }

    let (number, rest) = item_query(selector)?;
    let product = number.checked_sub(1).and_then(|i| CATALOG.get(i))?;
    let in_cart = state.cart.contains(&number);
    match rest {
        "" => Some(ElementHandle::new("div")),
        ".inventory_item_name" => Some(ElementHandle::new("div").with_text(product.name)),
        ".inventory_item_desc" => Some(ElementHandle::new("div").with_text(product.description)),
        ".inventory_item_price" => Some(ElementHandle::new("div").with_text(product.price)),
        ".btn_primary" if !in_cart => Some(ElementHandle::new("button").with_text("Add to cart")),
        ".btn_secondary" if in_cart => Some(ElementHandle::new("button").with_text("Remove")),
        _ => None,
    }
}

#[async_trait]
impl BrowserDriver for DemoStoreDriver {
    async fn navigate(&self, url: &str) -> PagewrightResult<()> {
        let route = self.route(url);
        let mut state = self.open()?;
        state.url = Url::parse(url).map_or_else(|_| url.to_string(), String::from);
        match route.as_deref() {
            Some("/" | "/index.html") => {
                state.session_user = None;
                show_login(&mut state, None);
            }
            Some("/inventory.html") => {
                if state.session_user.is_some() {
                    state.screen = Screen::Inventory;
                } else {
                    state.url = self.page_url("/");
                    show_login(&mut state, Some(ERR_NOT_LOGGED_IN));
                }
            }
            _ => state.screen = Screen::NotFound,
        }
        Ok(())
    }

    async fn current_url(&self) -> PagewrightResult<String> {
        Ok(self.open()?.url.clone())
    }

    async fn query_selector_all(&self, selector: &str) -> PagewrightResult<Vec<ElementHandle>> {
        let state = self.open()?;
        Ok(query(&state, selector))
    }

    async fn click(&self, selector: &str) -> PagewrightResult<()> {
        let mut state = self.open()?;
        if query(&state, selector).is_empty() {
            return Err(PagewrightError::ElementNotFound {
                selector: selector.to_string(),
            });
        }

        if state.screen == Screen::Login && selector == ".btn_action" {
            match authenticate(&state.username_field, &state.password_field) {
                Ok(()) => {
                    state.session_user = Some(state.username_field.clone());
                    state.url = self.page_url("/inventory.html");
                    state.screen = Screen::Inventory;
                    state.error = None;
                }
                Err(message) => state.error = Some(message),
            }
        } else if let Some((number, rest)) = item_query(selector) {
            match rest {
                ".btn_primary" => {
                    let _ = state.cart.insert(number);
                }
                ".btn_secondary" => {
                    let _ = state.cart.remove(&number);
                }
                _ => {}
            }
        }
        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> PagewrightResult<()> {
        let mut state = self.open()?;
        if query(&state, selector).is_empty() {
            return Err(PagewrightError::ElementNotFound {
                selector: selector.to_string(),
            });
        }
        match selector {
            "#user-name" => state.username_field.push_str(text),
            "#password" => state.password_field.push_str(text),
            _ => {}
        }
        Ok(())
    }

    async fn close(&self) -> PagewrightResult<()> {
        lock(&self.state).closed = true;
        Ok(())
    }
}
