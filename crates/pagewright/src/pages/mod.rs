//! Page objects for the demo storefront.

mod inventory;
mod login;

pub use inventory::InventoryPage;
pub use login::LoginPage;
