//! Option menus: the symbols a component declares in its Kconfig sources.
//!
//! The Kconfig language itself is not parsed here. A menu is either built in
//! memory by whoever probed the component, or loaded from a TOML catalogue.
//!
//! # Example TOML
//!
//! ```toml
//! [[option]]
//! symbol = "PLAT_KVM"
//! type = "bool"
//! prompt = "KVM guest"
//! default = "n"
//!
//! [[option]]
//! symbol = "KVM_MAX_IRQ_HANDLER_ENTRIES"
//! type = "int"
//! default = "8"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::values::{normalize_symbol, validate_symbol};

/// Type of a KConfig option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Bool,
    Tristate,
    String,
    Int,
    Hex,
}

impl OptionType {
    /// Whether options of this type switch something on or off.
    pub fn can_enable(self) -> bool {
        matches!(self, Self::Bool | Self::Tristate)
    }
}

/// A single declared option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuEntry {
    /// Symbol name, normalized with the `CONFIG_` prefix once in a menu.
    pub symbol: String,
    /// Option type.
    #[serde(rename = "type")]
    pub option_type: OptionType,
    /// Prompt text shown by menuconfig.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl MenuEntry {
    /// Create an entry without prompt or default.
    pub fn new(symbol: impl AsRef<str>, option_type: OptionType) -> Self {
        Self {
            symbol: normalize_symbol(symbol.as_ref()),
            option_type,
            prompt: None,
            default: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    option: Vec<MenuEntry>,
}

/// Authoritative catalogue of the options a component declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KConfigMenu {
    entries: IndexMap<String, MenuEntry>,
}

impl KConfigMenu {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parse a menu from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: MenuFile = toml::from_str(content)?;
        let mut menu = Self::new();
        for entry in file.option {
            let symbol = normalize_symbol(&entry.symbol);
            validate_symbol(&symbol)?;
            menu.insert(MenuEntry { symbol, ..entry });
        }
        tracing::debug!(options = menu.len(), "Loaded option menu");
        Ok(menu)
    }

    /// Read and parse a menu from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MenuNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Add an entry, replacing any entry with the same symbol.
    pub fn insert(&mut self, mut entry: MenuEntry) {
        entry.symbol = normalize_symbol(&entry.symbol);
        self.entries.insert(entry.symbol.clone(), entry);
    }

    /// Look up an entry by symbol, with or without the prefix.
    pub fn get(&self, symbol: &str) -> Option<&MenuEntry> {
        self.entries.get(&normalize_symbol(symbol))
    }

    /// Look up the entry that can enable `symbol`.
    ///
    /// Only `bool` and `tristate` options qualify; a `string` or `int`
    /// option with the same name does not enable anything.
    pub fn enablement(&self, symbol: &str) -> Option<&MenuEntry> {
        let entry = self.get(symbol)?;
        if entry.option_type.can_enable() {
            Some(entry)
        } else {
            tracing::warn!(
                symbol = %entry.symbol,
                option_type = ?entry.option_type,
                "Menu declares symbol but it cannot enable a component"
            );
            None
        }
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MenuEntry> for KConfigMenu {
    fn from_iter<I: IntoIterator<Item = MenuEntry>>(iter: I) -> Self {
        let mut menu = Self::new();
        for entry in iter {
            menu.insert(entry);
        }
        menu
    }
}
