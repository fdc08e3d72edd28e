//! Implementation of the `flags` command

use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use uk_component::{Component, PlatformConfig, derive_with_probe};
use uk_kconfig::{KConfigMenu, KConfigValues};

use crate::cli::FlagsArgs;
use crate::error::{CliError, Result};

/// Project file holding a single platform record.
#[derive(Debug, Deserialize)]
struct ProjectFile {
    platform: PlatformConfig,
}

/// Resolve the platform named by `args` and print its flags to `out`.
pub fn run_flags(args: &FlagsArgs, out: &mut dyn Write) -> Result<()> {
    let platform = match &args.file {
        Some(path) => load_project(path)?,
        None => PlatformConfig::parse_short(args.platform.as_deref().unwrap_or_default())?,
    };
    let platform = apply_overrides(platform, &args.overrides)?;

    let flags = match &args.menu {
        Some(path) => {
            let menu = KConfigMenu::from_path(path)?;
            derive_with_probe(&platform, &menu)?
        }
        None => platform.configuration_flags()?,
    };
    tracing::debug!(platform = platform.name(), flags = flags.len(), "Derived flags");

    if args.json {
        let json = serde_json::to_string_pretty(&flags)?;
        writeln!(out, "{json}")?;
    } else {
        write!(out, "{}", flags.to_dotconfig())?;
    }
    Ok(())
}

fn load_project(path: &Path) -> Result<PlatformConfig> {
    if !path.exists() {
        return Err(CliError::ProjectNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let project: ProjectFile = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Loaded project file");
    Ok(project.platform)
}

/// Layer command-line overrides over the platform's own configuration.
fn apply_overrides(
    platform: PlatformConfig,
    overrides: &[(String, String)],
) -> Result<PlatformConfig> {
    if overrides.is_empty() {
        return Ok(platform);
    }
    let mut configuration: KConfigValues = platform.component().configuration().clone();
    configuration.try_extend(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

    Ok(PlatformConfig::from_component(
        platform
            .component()
            .clone()
            .with_configuration(configuration),
    ))
}
