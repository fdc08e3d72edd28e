//! Component identity records.
//!
//! # Example TOML
//!
//! ```toml
//! name = "kvm"
//! source = "https://github.com/unikraft/unikraft.git"
//! version = "stable"
//!
//! [configuration]
//! KVM_VMM_QEMU = true
//! ```

use serde::{Deserialize, Serialize};
use uk_kconfig::KConfigValues;

use crate::error::{Error, Result};

/// Identity shared by every buildable component kind.
///
/// A record is immutable once built: fields are only reachable through
/// accessors, and the `with_*` methods consume the record to produce a new
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawComponentConfig")]
pub struct ComponentConfig {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version: String,
    #[serde(skip_serializing_if = "KConfigValues::is_empty")]
    configuration: KConfigValues,
}

/// Unvalidated shape of a structured record.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawComponentConfig {
    name: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    configuration: KConfigValues,
}

impl TryFrom<RawComponentConfig> for ComponentConfig {
    type Error = Error;

    fn try_from(raw: RawComponentConfig) -> Result<Self> {
        Ok(Self::new(raw.name)?
            .with_source(raw.source)
            .with_version(raw.version)
            .with_configuration(raw.configuration))
    }
}

impl ComponentConfig {
    /// Create a record with only a name.
    ///
    /// Fails with [`Error::InvalidSpec`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_spec(name, "component name must not be empty"));
        }
        Ok(Self {
            name,
            source: String::new(),
            version: String::new(),
            configuration: KConfigValues::new(),
        })
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Replace the KConfig overrides.
    pub fn with_configuration(mut self, configuration: KConfigValues) -> Self {
        self.configuration = configuration;
        self
    }

    /// User-facing identifier, also the seed of convention-derived symbols.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Origin locator (path, URL or registry reference); may be empty.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Free-form version token; may be empty.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// KConfig overrides supplied by the user. These take precedence over
    /// any derived value.
    pub fn configuration(&self) -> &KConfigValues {
        &self.configuration
    }
}
