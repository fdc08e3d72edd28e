//! KConfig primitives for Unikraft components.
//!
//! This crate provides the ordered value set that components hand to the
//! build-configuration writer, the `.config` text format of that set, and
//! an in-memory option menu describing the symbols a component declares.

pub mod dotconfig;
pub mod error;
pub mod menu;
pub mod values;

/// Prefix carried by every KConfig symbol.
pub const PREFIX: &str = "CONFIG_";

/// Value enabling a `bool` or `tristate` symbol.
pub const YES: &str = "y";

/// Value disabling a `bool` or `tristate` symbol.
pub const NO: &str = "n";

/// Value selecting a `tristate` symbol as a module.
pub const MODULE: &str = "m";

pub use error::{Error, Result};
pub use menu::{KConfigMenu, MenuEntry, OptionType};
pub use values::{KConfigValues, normalize_symbol};
