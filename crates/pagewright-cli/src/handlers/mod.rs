//! Command handlers - extracted from main.rs for testability

pub mod config;
pub mod init;
pub mod smoke;

pub use config::execute_config;
pub use init::execute_init;
pub use smoke::execute_smoke;
