//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pagewright: scaffold and check page-object browser test crates
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new page-object test crate
    Init(InitArgs),

    /// Print the effective test environment configuration
    Config(ConfigArgs),

    /// Run the login scenario against the configured site
    Smoke(SmokeArgs),
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Crate name (default: directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Base URL of the site under test
    #[arg(long, default_value = pagewright::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Configuration file (default: ./pagewright.yaml when present)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the password instead of masking it
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for the smoke command
#[derive(Parser, Debug)]
pub struct SmokeArgs {
    /// Configuration file (default: ./pagewright.yaml when present)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Run against the built-in simulated storefront instead of a browser
    #[arg(long)]
    pub demo: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_init_defaults() {
            let cli = Cli::try_parse_from(["pagewright", "init"]).unwrap();
            match cli.command {
                Commands::Init(args) => {
                    assert_eq!(args.path, PathBuf::from("."));
                    assert_eq!(args.base_url, "https://www.saucedemo.com");
                    assert!(args.name.is_none());
                    assert!(!args.force);
                }
                other => panic!("expected init, got {other:?}"),
            }
        }

        #[test]
        fn test_parse_init_options() {
            let cli = Cli::try_parse_from([
                "pagewright",
                "init",
                "shop-tests",
                "--name",
                "shop_e2e",
                "--base-url",
                "http://localhost:8080",
                "--force",
            ])
            .unwrap();
            let Commands::Init(args) = cli.command else {
                panic!("expected init");
            };
            assert_eq!(args.name.as_deref(), Some("shop_e2e"));
            assert_eq!(args.base_url, "http://localhost:8080");
            assert!(args.force);
        }

        #[test]
        fn test_global_flags() {
            let cli =
                Cli::try_parse_from(["pagewright", "config", "-vv", "--color", "never"]).unwrap();
            assert_eq!(cli.verbose, 2);
            assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);
        }

        #[test]
        fn test_smoke_demo_flag() {
            let cli = Cli::try_parse_from(["pagewright", "smoke", "--demo"]).unwrap();
            assert!(matches!(cli.command, Commands::Smoke(SmokeArgs { demo: true, .. })));
        }

        #[test]
        fn test_subcommand_required() {
            assert!(Cli::try_parse_from(["pagewright"]).is_err());
        }
    }
}
