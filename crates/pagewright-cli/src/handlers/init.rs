//! Init command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::templates::{render, TemplateVars, PROJECT_TEMPLATES};
use crate::InitArgs;
use pagewright::EnvironmentConfig;
use std::path::{Path, PathBuf};

/// What happened to one generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist
    Created(PathBuf),
    /// File existed and `--force` was given
    Overwritten(PathBuf),
    /// File existed and was left alone
    Skipped(PathBuf),
}

/// Execute the init command
pub fn execute_init(config: &CliConfig, args: &InitArgs) -> CliResult<Vec<WriteOutcome>> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    EnvironmentConfig::new()
        .with_base_url(args.base_url.clone())
        .validate()?;
    let vars = TemplateVars {
        crate_name: crate_name_for(&args.path, args.name.as_deref())?,
        base_url: args.base_url.clone(),
    };

    reporter.info(&format!(
        "Initializing {} in {}",
        vars.crate_name,
        args.path.display()
    ));

    let outcomes = write_project(&args.path, &vars, args.force)?;
    for outcome in &outcomes {
        match outcome {
            WriteOutcome::Created(path) => reporter.success(&format!("created {}", path.display())),
            WriteOutcome::Overwritten(path) => {
                reporter.success(&format!("overwrote {}", path.display()));
            }
            WriteOutcome::Skipped(path) => {
                reporter.skipped(&format!("{} exists (use --force)", path.display()));
            }
        }
    }
    Ok(outcomes)
}

/// Render every template under `root`
pub fn write_project(root: &Path, vars: &TemplateVars, force: bool) -> CliResult<Vec<WriteOutcome>> {
    let mut outcomes = Vec::with_capacity(PROJECT_TEMPLATES.len());
    for (relative, template) in PROJECT_TEMPLATES {
        let path = root.join(relative);
        let existed = path.exists();
        if existed && !force {
            outcomes.push(WriteOutcome::Skipped(path));
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, render(template, vars))?;
        tracing::debug!(path = %path.display(), "wrote template");
        outcomes.push(if existed {
            WriteOutcome::Overwritten(path)
        } else {
            WriteOutcome::Created(path)
        });
    }
    Ok(outcomes)
}

/// Explicit name, or the target directory's name
pub fn crate_name_for(path: &Path, explicit: Option<&str>) -> CliResult<String> {
    let name = match explicit {
        Some(name) => name.to_string(),
        None => {
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()?.join(path)
            };
            absolute
                .components()
                .filter_map(|c| match c {
                    std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .next_back()
                .ok_or_else(|| CliError::invalid_argument("cannot derive a crate name; pass --name"))?
        }
    };
    validate_crate_name(&name)?;
    Ok(name)
}

/// Lowercase ASCII letters, digits, `-` and `_`; must not start with a digit
pub fn validate_crate_name(name: &str) -> CliResult<()> {
    let Some(first) = name.chars().next() else {
        return Err(CliError::invalid_argument("crate name is empty"));
    };
    if first.is_ascii_digit() {
        return Err(CliError::invalid_argument(format!(
            "crate name `{name}` starts with a digit"
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(CliError::invalid_argument(format!(
            "crate name `{name}` contains `{bad}`"
        )));
    }
    Ok(())
}
