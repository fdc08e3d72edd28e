//! Platform components.
//!
//! A platform is the environment a unikernel image boots on, such as `kvm`,
//! `xen` or `linuxu`. Platforms are written either in short syntax, where
//! the whole token is the platform name, or as a structured record.
//!
//! # Example TOML
//!
//! ```toml
//! platform = "kvm"
//! ```
//!
//! ```toml
//! [platform]
//! name = "kvm"
//! version = "stable"
//!
//! [platform.configuration]
//! KVM_VMM_QEMU = true
//! ```

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uk_kconfig::{KConfigMenu, KConfigValues};

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::derive::derive_flags;
use crate::error::{Error, Result};
use crate::kind::ComponentType;

/// A target platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    component: ComponentConfig,
}

impl PlatformConfig {
    /// Parse the short syntax of a platform.
    ///
    /// The whole token is the platform name. Fails with
    /// [`Error::InvalidSpec`] when the token is empty.
    pub fn parse_short(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::invalid_spec(value, "cannot omit platform name"));
        }
        Ok(Self::from_component(ComponentConfig::new(value)?))
    }

    /// Wrap an already validated identity record.
    pub fn from_component(component: ComponentConfig) -> Self {
        Self { component }
    }
}

impl FromStr for PlatformConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_short(s)
    }
}

impl Serialize for PlatformConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.component.serialize(serializer)
    }
}

/// Accepts a bare name (short syntax) or a record table.
impl<'de> Deserialize<'de> for PlatformConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(PlatformVisitor)
    }
}

struct PlatformVisitor;

impl<'de> Visitor<'de> for PlatformVisitor {
    type Value = PlatformConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a platform name or a platform table")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
        PlatformConfig::parse_short(value).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Self::Value, A::Error> {
        let component = ComponentConfig::deserialize(MapAccessDeserializer::new(map))?;
        Ok(PlatformConfig::from_component(component))
    }
}

impl Component for PlatformConfig {
    fn kind(&self) -> ComponentType {
        ComponentType::Plat
    }

    fn component(&self) -> &ComponentConfig {
        &self.component
    }

    // TODO: probe the Unikraft core and the platform's own repository for
    // its Kconfig menu once sources are fetched before configuration.
    fn option_menu(&self) -> Result<Option<KConfigMenu>> {
        Ok(None)
    }

    fn configuration_flags(&self) -> Result<KConfigValues> {
        let menu = self.option_menu()?;
        derive_flags(self.kind(), &self.component, menu.as_ref())
    }

    fn describe(&self, sink: &mut dyn Write) -> Result<()> {
        tracing::debug!(platform = self.name(), "describe requested for platform");
        writeln!(
            sink,
            "unsupported: describe is not implemented for platform '{}'",
            self.name()
        )?;
        Ok(())
    }
}
