//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Resolve Unikraft component references into KConfig flags
#[derive(Parser, Debug)]
#[command(name = "ukcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the KConfig flags implied by a platform
    ///
    /// Examples:
    ///   ukcfg flags kvm                      # Short syntax
    ///   ukcfg flags xen -c XEN_HVMLITE=y     # With an override
    ///   ukcfg flags --file project.toml      # Structured record
    ///   ukcfg flags kvm --menu kvm.toml      # With a known option menu
    Flags(FlagsArgs),

    /// Describe a platform
    Describe {
        /// Platform in short syntax (e.g., "kvm")
        platform: String,
    },
}

/// Arguments of the `flags` command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FlagsArgs {
    /// Platform in short syntax (e.g., "kvm")
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub platform: Option<String>,

    /// TOML file with a `platform` key (string or table)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// KConfig override, applied over the platform's configuration
    #[arg(short = 'c', long = "config", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(String, String)>,

    /// TOML option menu to use instead of probing
    #[arg(long)]
    pub menu: Option<PathBuf>,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

/// Parse a `KEY=VALUE` override.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
