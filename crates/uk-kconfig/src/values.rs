//! Ordered KConfig value sets.
//!
//! A [`KConfigValues`] maps KConfig symbols to their textual values. The
//! insertion order is kept because the build-configuration writer emits
//! entries in that order.
//!
//! Keys are normalized on insert: `PLAT_XEN` and `CONFIG_PLAT_XEN` name the
//! same symbol.
//!
//! # Example TOML
//!
//! Value sets deserialize from a table of scalars:
//!
//! ```toml
//! [configuration]
//! PLAT_KVM = true
//! CONFIG_STACK_SIZE_PAGE_ORDER = 4
//! LIBUKDEBUG_PRINTK_WARN = "y"
//! ```
//!
//! or from a list of assignments:
//!
//! ```toml
//! configuration = ["CONFIG_PLAT_KVM=y", "LIBUKDEBUG_PRINTK_WARN=y"]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::{NO, PREFIX, YES};

/// Normalize a symbol so that it carries the [`PREFIX`].
///
/// Surrounding whitespace is dropped.
///
/// ```
/// use uk_kconfig::normalize_symbol;
///
/// assert_eq!(normalize_symbol("PLAT_XEN"), "CONFIG_PLAT_XEN");
/// assert_eq!(normalize_symbol("CONFIG_PLAT_XEN"), "CONFIG_PLAT_XEN");
/// ```
pub fn normalize_symbol(symbol: &str) -> String {
    let symbol = symbol.trim();
    if symbol.starts_with(PREFIX) {
        symbol.to_string()
    } else {
        format!("{PREFIX}{symbol}")
    }
}

/// Check that a normalized symbol only uses characters KConfig accepts.
pub(crate) fn validate_symbol(symbol: &str) -> Result<()> {
    let bare = symbol.strip_prefix(PREFIX).unwrap_or(symbol);
    if bare.is_empty() {
        return Err(Error::InvalidSymbol {
            symbol: symbol.to_string(),
            reason: "symbol name must not be empty".to_string(),
        });
    }
    if !bare.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::InvalidSymbol {
            symbol: symbol.to_string(),
            reason: "symbol must contain only alphanumeric characters or underscores".to_string(),
        });
    }
    Ok(())
}

/// Ordered set of KConfig symbol assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawValues")]
pub struct KConfigValues {
    values: IndexMap<String, String>,
}

impl KConfigValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Assign `value` to `symbol`.
    ///
    /// An existing assignment is replaced in place, keeping its position.
    /// Fails with [`Error::InvalidSymbol`] when the normalized symbol is not
    /// a valid KConfig name.
    pub fn set(&mut self, symbol: impl AsRef<str>, value: impl Into<String>) -> Result<()> {
        let symbol = normalize_symbol(symbol.as_ref());
        validate_symbol(&symbol)?;
        self.values.insert(symbol, value.into());
        Ok(())
    }

    /// Assign `value` to `symbol` only if the symbol is not yet assigned.
    ///
    /// Returns `true` when the value was inserted.
    pub fn set_default(
        &mut self,
        symbol: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Result<bool> {
        let symbol = normalize_symbol(symbol.as_ref());
        validate_symbol(&symbol)?;
        if self.values.contains_key(&symbol) {
            tracing::trace!(symbol = %symbol, "Keeping existing assignment");
            return Ok(false);
        }
        self.values.insert(symbol, value.into());
        Ok(true)
    }

    /// Build a set from `(symbol, value)` pairs, later pairs winning.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = Self::new();
        values.try_extend(pairs)?;
        Ok(values)
    }

    /// Assign every `(symbol, value)` pair in order.
    ///
    /// Stops at the first invalid symbol; pairs before it stay assigned.
    pub fn try_extend<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (symbol, value) in pairs {
            self.set(symbol, value)?;
        }
        Ok(())
    }

    /// Apply every assignment of `other` on top of this set.
    pub fn override_by(&mut self, other: &KConfigValues) {
        for (symbol, value) in other.iter() {
            self.values.insert(symbol.to_string(), value.to_string());
        }
    }

    /// Get the value assigned to `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.values
            .get(&normalize_symbol(symbol))
            .map(String::as_str)
    }

    /// Check whether `symbol` is assigned.
    pub fn contains_key(&self, symbol: &str) -> bool {
        self.values.contains_key(&normalize_symbol(symbol))
    }

    /// Check whether `symbol` is assigned [`YES`].
    pub fn is_enabled(&self, symbol: &str) -> bool {
        self.get(symbol) == Some(YES)
    }

    /// Iterate over `(symbol, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of assigned symbols.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for KConfigValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter())
    }
}

/// Accepted on-disk shapes of a value set.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValues {
    Map(IndexMap<String, RawScalar>),
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl RawScalar {
    fn into_value(self) -> String {
        match self {
            RawScalar::Bool(true) => YES.to_string(),
            RawScalar::Bool(false) => NO.to_string(),
            RawScalar::Int(n) => n.to_string(),
            RawScalar::Str(s) => s,
        }
    }
}

impl TryFrom<RawValues> for KConfigValues {
    type Error = Error;

    fn try_from(raw: RawValues) -> Result<Self> {
        let mut values = KConfigValues::new();
        match raw {
            RawValues::Map(map) => {
                for (symbol, scalar) in map {
                    values.set(symbol, scalar.into_value())?;
                }
            }
            RawValues::List(entries) => {
                for entry in entries {
                    let (symbol, value) = entry
                        .split_once('=')
                        .ok_or_else(|| Error::InvalidAssignment {
                            entry: entry.clone(),
                        })?;
                    values.set(symbol, value.trim())?;
                }
            }
        }
        Ok(values)
    }
}
