//! Composition root shared by the suites.

#![allow(dead_code)]

use pagewright::prelude::*;
use std::sync::Arc;

pub fn config() -> EnvironmentConfig {
    pagewright::logging::init();
    EnvironmentConfig::new()
        .with_element_timeout(200)
        .with_poll_interval(5)
}

/// Fresh storefront plus a facade bound to it
pub fn store() -> (Arc<DemoStoreDriver>, Navigation) {
    let config = config();
    let store = Arc::new(DemoStoreDriver::from_config(&config).unwrap());
    let nav = Navigation::new(store.clone(), &config).unwrap();
    (store, nav)
}

pub async fn logged_in() -> (Arc<DemoStoreDriver>, InventoryPage) {
    let (store, nav) = store();
    let inventory = nav
        .navigate_to_inventory_page(&Credentials::default())
        .await
        .unwrap();
    (store, inventory)
}
