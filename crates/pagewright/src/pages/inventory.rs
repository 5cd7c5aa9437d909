//! Inventory screen (`/inventory.html`).

use crate::driver::DriverRef;
use crate::element::{Element, ElementKind};
use crate::locator::{LocatorOptions, Selector};
use crate::page_object::{PageIdentity, PageObject};
use crate::result::PagewrightResult;

const INVENTORY_ITEM_NAME: &str = "inventory_item_name";
const INVENTORY_ITEM_DESCRIPTION: &str = "inventory_item_desc";
const INVENTORY_ITEM_PRICE: &str = "inventory_item_price";
const ADD_TO_CART: &str = "btn_primary";
const REMOVE: &str = "btn_secondary";

/// Product listing shown after a successful login.
///
/// Items are addressed by their 1-based position in the list.
#[derive(Debug, Clone)]
pub struct InventoryPage {
    inventory_list: Element,
    inventory_header: Element,
}

impl InventoryPage {
    /// Product list container
    #[must_use]
    pub const fn inventory_list(&self) -> &Element {
        &self.inventory_list
    }

    /// Secondary header bar
    #[must_use]
    pub const fn inventory_header(&self) -> &Element {
        &self.inventory_header
    }

    /// Container of the `item_number`-th product, once the list is displayed
    pub async fn item(&self, item_number: usize) -> PagewrightResult<Element> {
        let _ = self.inventory_list.wait_until_displayed().await?;
        Ok(self.inventory_list.find(
            ElementKind::Div,
            Selector::css(format!("div.inventory_item:nth-of-type({item_number})")),
        ))
    }

    async fn item_text(&self, item_number: usize, class: &str) -> PagewrightResult<String> {
        self.item(item_number)
            .await?
            .find(ElementKind::StaticText, Selector::class_name(class))
            .text()
            .await
    }

    /// Product name
    pub async fn item_name(&self, item_number: usize) -> PagewrightResult<String> {
        self.item_text(item_number, INVENTORY_ITEM_NAME).await
    }

    /// Product marketing description
    pub async fn item_description(&self, item_number: usize) -> PagewrightResult<String> {
        self.item_text(item_number, INVENTORY_ITEM_DESCRIPTION)
            .await
    }

    /// Product price as displayed, e.g. `$15.99`
    pub async fn item_price(&self, item_number: usize) -> PagewrightResult<String> {
        self.item_text(item_number, INVENTORY_ITEM_PRICE).await
    }

    /// Press the product's "Add to cart" button
    pub async fn add_item_to_cart(&self, item_number: usize) -> PagewrightResult<()> {
        tracing::info!(item_number, "adding item to cart");
        self.item(item_number)
            .await?
            .find(ElementKind::Button, Selector::class_name(ADD_TO_CART))
            .click()
            .await
    }

    /// Whether the product's button has flipped to "Remove"
    pub async fn item_added_to_cart(&self, item_number: usize) -> PagewrightResult<bool> {
        self.item(item_number)
            .await?
            .find(ElementKind::Button, Selector::class_name(REMOVE))
            .is_displayed()
            .await
    }
}

impl PageIdentity for InventoryPage {
    fn landmark(&self) -> &Element {
        &self.inventory_header
    }
}

impl PageObject for InventoryPage {
    const NAME: &'static str = "InventoryPage";

    fn url_path() -> &'static str {
        "/inventory.html"
    }

    fn from_driver(driver: DriverRef, options: LocatorOptions) -> Self {
        Self {
            inventory_list: Element::div(driver.clone(), Selector::css(".inventory_list"))
                .with_options(options),
            inventory_header: Element::div(driver, Selector::css(".header_secondary_container"))
                .with_options(options),
        }
    }
}
