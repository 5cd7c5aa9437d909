//! Pagewright CLI Library
//!
//! Command-line interface for scaffolding and checking Pagewright test crates.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
mod output;
mod templates;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, InitArgs, SmokeArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;
pub use templates::{render, TemplateVars, PROJECT_TEMPLATES};
