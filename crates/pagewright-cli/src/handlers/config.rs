//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;
use pagewright::EnvironmentConfig;

const MASK: &str = "********";

/// Execute the config command
pub fn execute_config(_config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let environment = EnvironmentConfig::load(args.file.as_deref())?;
    print!("{}", render_config(&environment, args.show_secrets)?);
    Ok(())
}

/// Effective configuration as YAML, password masked unless `show_secrets`
pub fn render_config(environment: &EnvironmentConfig, show_secrets: bool) -> CliResult<String> {
    let mut shown = environment.clone();
    if !show_secrets {
        MASK.clone_into(&mut shown.credentials.password);
    }
    Ok(shown.to_yaml()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_masked() {
        let yaml = render_config(&EnvironmentConfig::new(), false).unwrap();
        assert!(yaml.contains(MASK));
        assert!(!yaml.contains("secret_sauce"));
    }

    #[test]
    fn test_show_secrets() {
        let yaml = render_config(&EnvironmentConfig::new(), true).unwrap();
        assert!(yaml.contains("secret_sauce"));
    }

    #[test]
    fn test_output_reloads() {
        let environment = EnvironmentConfig::new().with_base_url("http://localhost:9000");
        let yaml = render_config(&environment, true).unwrap();
        assert_eq!(EnvironmentConfig::from_yaml(&yaml).unwrap(), environment);
    }
}
