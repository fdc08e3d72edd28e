//! Implementation of the `describe` command

use std::io::Write;

use uk_component::{Component, PlatformConfig};

use crate::error::Result;

/// Parse `platform` in short syntax and write its description to `out`.
pub fn run_describe(platform: &str, out: &mut dyn Write) -> Result<()> {
    let platform = PlatformConfig::parse_short(platform)?;
    platform.describe(out)?;
    Ok(())
}
