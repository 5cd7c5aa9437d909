//! Pagewright CLI
//!
//! ## Usage
//!
//! ```bash
//! pagewright init shop-tests            # Scaffold a test crate
//! pagewright config                     # Show the effective environment
//! pagewright smoke --demo               # Login scenario against the simulated store
//! ```

use clap::Parser;
use pagewright_cli::{handlers, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    pagewright::logging::init_with_filter(
        config.verbosity.log_filter(),
        config.color.should_color(),
    );

    match cli.command {
        Commands::Init(args) => handlers::execute_init(&config, &args).map(|_| ()),
        Commands::Config(args) => handlers::execute_config(&config, &args),
        Commands::Smoke(args) => handlers::execute_smoke(&config, &args).map(|_| ()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_quiet_wins() {
        let cli = Cli::parse_from(["pagewright", "-q", "-v", "config"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_build_config_verbose_levels() {
        let cli = Cli::parse_from(["pagewright", "-v", "config"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Verbose);
        let cli = Cli::parse_from(["pagewright", "-vvv", "config"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Debug);
    }
}
