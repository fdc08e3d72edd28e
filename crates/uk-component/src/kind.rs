//! Component kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kind of a buildable component.
///
/// The kind is a static property of the variant type wrapping a
/// [`ComponentConfig`](crate::ComponentConfig); it is never read from
/// user input for an already-typed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// The Unikraft core
    Core,
    /// A CPU architecture
    Arch,
    /// A target platform (hypervisor or host environment)
    Plat,
    /// A micro-library
    Lib,
    /// An application
    App,
}

impl ComponentType {
    /// All kinds, in build order.
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Core,
        ComponentType::Arch,
        ComponentType::Plat,
        ComponentType::Lib,
        ComponentType::App,
    ];

    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Arch => "arch",
            Self::Plat => "plat",
            Self::Lib => "lib",
            Self::App => "app",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::invalid_spec(s, "unknown component type"))
    }
}
